//! Frame assembly: banner, header, status line, title and body.
//!
//! Rendering is pure. [`Screen::render_frame`] returns the full frame as a
//! string; the console clears the terminal and writes it in one go.

use std::io::{self, Write};

use anyhow::{Result, ensure};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::format::{Alignment, LayoutParams, align, align_lines, display_width, divider, split_ratio};
use crate::{common::PROJECT_VERSION, default::embedded_banner};

pub const DEFAULT_HUD_WIDTH: usize = 80;
pub const MIN_HUD_WIDTH: usize = 60;
pub const MAX_HUD_WIDTH: usize = 100;

/// Width of the right-hand tag column of the header rows.
pub const TAG_WIDTH: usize = 19;
/// Widest caption that still fits one line at [`MIN_HUD_WIDTH`].
pub const MAX_CAPTION_WIDTH: usize = MIN_HUD_WIDTH - TAG_WIDTH - 1;
const TITLE_PADDING: usize = 2;
const BANNER_FILL: &str = "░";
const BLANK_LINES: usize = 100;

/// How the visible screen is erased before each frame.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ClearMode {
    /// Erase the display and move the cursor home.
    #[default]
    #[display("ansi")]
    Ansi,
    /// Scroll the old frame away with blank lines, for terminals without ANSI support.
    #[display("blank-lines")]
    BlankLines,
}

/// Erases the visible screen.
pub fn clear_screen<W: Write>(out: &mut W, mode: ClearMode) -> io::Result<()> {
    match mode {
        ClearMode::Ansi => queue!(out, Clear(ClearType::All), MoveTo(0, 0)),
        ClearMode::BlankLines => out.write_all("\n".repeat(BLANK_LINES).as_bytes()),
    }
}

/// Read-only view of the seat grid used for the status line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridSnapshot {
    pub rows: usize,
    pub columns: usize,
    pub occupied: usize,
}

impl GridSnapshot {
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }
}

/// One row of the header block: a centered caption and a right-aligned tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRow {
    pub caption: String,
    #[serde(default)]
    pub tag: String,
}

impl HeaderRow {
    #[must_use]
    pub fn new(caption: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            tag: tag.into(),
        }
    }

    /// Fails when the row would wrap at any allowed HUD width.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.caption.contains('\n') && !self.tag.contains('\n'),
            "header row '{}' must be a single line",
            self.caption
        );
        ensure!(
            display_width(&self.caption) <= MAX_CAPTION_WIDTH,
            "header caption '{}' is wider than {MAX_CAPTION_WIDTH} columns",
            self.caption
        );
        ensure!(
            display_width(&self.tag) <= TAG_WIDTH,
            "header tag '{}' is wider than {TAG_WIDTH} columns",
            self.tag
        );
        Ok(())
    }
}

#[must_use]
pub fn default_header() -> Vec<HeaderRow> {
    vec![
        HeaderRow::new("Seat Reservation System", "seatrs"),
        HeaderRow::new("Terminal Edition", format!("v{PROJECT_VERSION}")),
    ]
}

/// Everything the HUD needs besides the grid snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudLayout {
    pub width: usize,
    pub banner: Vec<String>,
    pub header: Vec<HeaderRow>,
    /// Colour the error banner.
    pub color: bool,
}

impl Default for HudLayout {
    fn default() -> Self {
        Self {
            width: DEFAULT_HUD_WIDTH,
            banner: embedded_banner(),
            header: default_header(),
            color: false,
        }
    }
}

/// The per-prompt part of a frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameText<'a> {
    pub title: &'a str,
    pub error: Option<&'a str>,
    pub body: &'a str,
    /// Answers already given in the current entry sequence.
    pub echo: &'a str,
}

/// Renders frames for the current layout.
#[derive(Debug, Clone)]
pub struct Screen {
    layout: HudLayout,
}

impl Screen {
    #[must_use]
    pub fn new(layout: HudLayout) -> Self {
        Self { layout }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.layout.width
    }

    /// Changes the HUD width; the value must lie in
    /// `MIN_HUD_WIDTH..=MAX_HUD_WIDTH`.
    pub fn set_width(&mut self, width: usize) -> Result<()> {
        ensure!(
            (MIN_HUD_WIDTH..=MAX_HUD_WIDTH).contains(&width),
            "HUD width must be between {MIN_HUD_WIDTH} and {MAX_HUD_WIDTH}, got {width}"
        );
        self.layout.width = width;
        Ok(())
    }

    /// Banner, header, status line and the divider under them.
    #[must_use]
    pub fn render_hud(&self, grid: GridSnapshot) -> String {
        let width = self.layout.width;
        let mut hud = String::new();

        if !self.layout.banner.is_empty() {
            let art_width = self
                .layout
                .banner
                .iter()
                .map(|line| display_width(line))
                .max()
                .unwrap_or(0);
            let art = LayoutParams::new(width)
                .with_fill(BANNER_FILL)
                .with_explicit_length(art_width);
            hud.push_str(&align_lines(&self.layout.banner, &art, Alignment::Center));
            hud.push('\n');
        }

        hud.push_str(&divider('=', width));
        let caption = LayoutParams::new(width.saturating_sub(TAG_WIDTH).saturating_sub(1));
        let tag = LayoutParams::new(TAG_WIDTH);
        for row in &self.layout.header {
            hud.push_str(&align(&row.caption, &caption, Alignment::Center));
            hud.push('|');
            hud.push_str(&align(&row.tag, &tag, Alignment::Right));
            hud.push('\n');
        }
        hud.push_str(&divider('=', width));

        hud.push_str(&self.status_line(grid));
        hud.push_str(&divider('-', width));
        hud
    }

    /// Dimensions on the left half, occupancy on the right half.
    #[must_use]
    pub fn status_line(&self, grid: GridSnapshot) -> String {
        let (left, right) = split_ratio(self.layout.width, 1, 1);
        let dimensions = format!("{} Rows x {} Cols", grid.rows, grid.columns);
        let occupancy = format!("{}/{} seats occupied", grid.occupied, grid.capacity());

        format!(
            "{}{}\n",
            align(&dimensions, &LayoutParams::new(left), Alignment::Left),
            align(&occupancy, &LayoutParams::new(right), Alignment::Right),
        )
    }

    /// A complete frame: HUD, title, optional error banner, body, divider and
    /// the echo of earlier answers.
    #[must_use]
    pub fn render_frame(&self, grid: GridSnapshot, text: &FrameText<'_>) -> String {
        let width = self.layout.width;
        let title_params = LayoutParams::new(width).with_padding(TITLE_PADDING);

        let mut frame = self.render_hud(grid);

        frame.push_str(&align(text.title, &title_params, Alignment::Center));
        frame.push('\n');

        if let Some(error) = text.error {
            let banner = align(&format!("## {error} ##"), &title_params, Alignment::Center);
            if self.layout.color {
                frame.push_str(&banner.red().bold().to_string());
            } else {
                frame.push_str(&banner);
            }
            frame.push('\n');
        }

        if !text.body.is_empty() {
            frame.push_str(text.body);
            frame.push('\n');
        }

        frame.push_str(&divider('-', width));
        frame.push_str(text.echo);
        frame
    }
}
