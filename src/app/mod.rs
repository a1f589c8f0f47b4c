//! The interactive program: main menu, settings and the seat screens.

mod reservations;

use std::{
    fmt,
    io::{BufRead, Write},
};

use anyhow::{Context, Result};
use log::info;

use crate::{
    MenuAction, MenuOption, SettingsAction,
    config::MAX_DIMENSION,
    get_menu_options, get_settings_options,
    seats::{GridView, SeatGrid, seat_map},
    tui::{
        InputClosed, IntPrompt, LayoutParams, MAX_HUD_WIDTH, MIN_HUD_WIDTH, RowColumnPrompt,
        Session, format::format_menu, notice,
    },
};

const MAIN_MENU_TITLE: &str = "[Main Menu]\nChoose an option.";
const SETTINGS_TITLE: &str = "[Settings]\nChoose an option.";
const LAYOUT_TITLE: &str = "[Show Seat Layout]";
const LAYOUT_LEGEND: &str = "Not Occupied O | X Occupied";
const DIMENSIONS_TITLE: &str = "[Edit Seat Layout Dimensions]\nEnter new dimensions.";
const HUD_LENGTH_TITLE: &str = "[Edit HUD Length]\nEnter new HUD length.";

/// Where control goes after the settings menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One interactive session over a seat grid.
pub struct App<R, W> {
    session: Session<R, W>,
    grid: SeatGrid,
}

impl<R, W> App<R, W>
where
    R: BufRead,
    W: Write,
{
    #[must_use]
    pub fn new(session: Session<R, W>, grid: SeatGrid) -> Self {
        Self { session, grid }
    }

    #[must_use]
    pub fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    #[must_use]
    pub fn session(&self) -> &Session<R, W> {
        &self.session
    }

    /// Runs the main menu until the user exits or the input closes.
    pub fn run(&mut self) -> Result<()> {
        info!(
            "session started: {}x{} seats, HUD width {}",
            self.grid.dimensions().0,
            self.grid.dimensions().1,
            self.session.screen.width()
        );

        match self.main_menu() {
            Err(e) if e.is::<InputClosed>() => {
                info!("input closed, leaving");
                Ok(())
            }
            Err(e) => Err(e),
            Ok(()) => {
                info!("exit selected");
                Ok(())
            }
        }
    }

    fn main_menu(&mut self) -> Result<()> {
        loop {
            let action = self.choose(MAIN_MENU_TITLE, &get_menu_options())?;

            match action {
                MenuAction::ShowLayout => self.show_layout()?,
                MenuAction::CreateReservation => self.create_reservation()?,
                MenuAction::ReadReservation => self.read_reservation()?,
                MenuAction::UpdateReservation => self.update_reservation()?,
                MenuAction::CancelReservation => self.cancel_reservation()?,
                MenuAction::Settings => {
                    if self.settings()? == Flow::Exit {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn settings(&mut self) -> Result<Flow> {
        loop {
            let action = self.choose(SETTINGS_TITLE, &get_settings_options())?;

            let done = match action {
                SettingsAction::Exit => return Ok(Flow::Exit),
                SettingsAction::Return => return Ok(Flow::Continue),
                SettingsAction::EditDimensions => self.edit_dimensions()?,
                SettingsAction::EditHudLength => self.edit_hud_length()?,
            };

            // a cancelled edit goes back to the settings menu
            if done {
                return Ok(Flow::Continue);
            }
        }
    }

    /// Shows `options` and returns the picked action.
    fn choose<A: Copy>(&mut self, title: &str, options: &[MenuOption<A>]) -> Result<A> {
        let min = options.iter().map(|o| o.key).min().unwrap_or_default();
        let max = options.iter().map(|o| o.key).max().unwrap_or_default();
        let body = self.options_text(options.iter().map(|o| (o.key, o.label)));

        let choice = IntPrompt::builder()
            .title(title)
            .body(body)
            .min(min)
            .max(max)
            .abort_sentinels(Vec::new())
            .build()
            .run(&mut self.session, self.grid.snapshot())?;

        let option = options
            .iter()
            .find(|o| o.key == choice.value)
            .with_context(|| format!("no menu option for key {}", choice.value))?;
        info!("picked [{}] {}", option.key, option.label);
        Ok(option.action)
    }

    /// `[key] label` lines in the option list layout.
    fn options_text<K, L, I>(&self, entries: I) -> String
    where
        K: fmt::Display,
        L: AsRef<str>,
        I: IntoIterator<Item = (K, L)>,
    {
        format_menu(entries, &LayoutParams::options(self.session.screen.width()))
    }

    fn show_layout(&mut self) -> Result<()> {
        let instructions = self.options_text([("Enter", "Return to Main Menu")]);
        let grid = self.grid.snapshot();

        match seat_map(&self.grid, self.session.screen.width()) {
            Ok(map) => {
                let title = format!("{LAYOUT_TITLE}\n{LAYOUT_LEGEND}");
                let body = format!("\n{map}\n{instructions}");
                notice(&mut self.session, grid, &title, &body, None, "")?;
            }
            Err(err) => {
                let message = err.to_string();
                notice(
                    &mut self.session,
                    grid,
                    LAYOUT_TITLE,
                    &instructions,
                    Some(&message),
                    "",
                )?;
            }
        }
        Ok(())
    }

    /// Returns `true` when the grid was resized.
    fn edit_dimensions(&mut self) -> Result<bool> {
        let max = i64::try_from(MAX_DIMENSION).unwrap_or(i64::MAX);
        let pair = RowColumnPrompt::builder()
            .title(DIMENSIONS_TITLE)
            .body(self.options_text([(0, "Return to Settings")]))
            .row_prompt("Enter the number of rows: ")
            .column_prompt("Enter the number of columns: ")
            .max_row(max)
            .max_column(max)
            .build()
            .run(&mut self.session, self.grid.snapshot())?;

        let Some((rows, columns)) = pair.committed() else {
            return Ok(false);
        };

        let rows = usize::try_from(rows).context("row count out of range")?;
        let columns = usize::try_from(columns).context("column count out of range")?;
        self.grid.resize(rows, columns);
        Ok(true)
    }

    /// Returns `true` when the HUD width was changed.
    fn edit_hud_length(&mut self) -> Result<bool> {
        let result = IntPrompt::builder()
            .title(HUD_LENGTH_TITLE)
            .body(self.options_text([(0, "Return to Settings")]))
            .prompt("Enter new HUD length: ")
            .min(i64::try_from(MIN_HUD_WIDTH).unwrap_or_default())
            .max(i64::try_from(MAX_HUD_WIDTH).unwrap_or(i64::MAX))
            .out_of_range_message(format!(
                "Invalid input! Please enter an integer between {MIN_HUD_WIDTH} and {MAX_HUD_WIDTH}."
            ))
            .build()
            .run(&mut self.session, self.grid.snapshot())?;

        if result.aborted {
            return Ok(false);
        }

        let width = usize::try_from(result.value).context("HUD length out of range")?;
        self.session.screen.set_width(width)?;
        info!("HUD width set to {width}");
        Ok(true)
    }
}
