//! Create, read, update and cancel screens.
//!
//! Every operation runs the same loop: pick a seat, check it, do the work,
//! then show a notice where `0` starts over and Enter returns to the main
//! menu. Aborting the seat prompt returns to the main menu at once.

use std::io::{BufRead, Write};

use anyhow::Result;

use super::App;
use crate::{
    seats::{GridView, Reservation, Seat, SeatError, SeatGrid},
    tui::{
        Alignment, LayoutParams, NameDescriptionPrompt, NoticeReply, RowColumnPrompt,
        format::align, notice,
    },
};

/// Typed on a notice screen to run the operation again.
const AGAIN: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Create,
    Read,
    Update,
    Cancel,
}

impl Operation {
    fn heading(self) -> &'static str {
        match self {
            Self::Create => "[Create Seat Reservation]",
            Self::Read => "[Read/View Seat Reservation]",
            Self::Update => "[Update Seat Reservation]",
            Self::Cancel => "[Delete Seat Reservation]",
        }
    }

    fn seat_instruction(self) -> &'static str {
        match self {
            Self::Create | Self::Update => "Enter the row and column of the seat.",
            Self::Read => "Enter the row and column of the seat reservation to read.",
            Self::Cancel => "Enter the row and column of the seat reservation to cancel.",
        }
    }

    fn again_label(self) -> &'static str {
        match self {
            Self::Create => "Create another Seat Reservation",
            Self::Read => "Read/View another Seat Reservation",
            Self::Update => "Update another Seat Reservation",
            Self::Cancel => "Delete another Seat Reservation",
        }
    }

    fn done_message(self) -> &'static str {
        match self {
            Self::Create => "Reservation created successfully.",
            Self::Read => "Seat Reservation Details:",
            Self::Update => "Reservation updated successfully.",
            Self::Cancel => "Reservation deleted successfully.",
        }
    }

    /// Whether the seat must be free (create) or reserved (everything else).
    fn check(self, grid: &SeatGrid, seat: Seat) -> Result<(), SeatError> {
        match self {
            Self::Create => grid.check_free(seat),
            Self::Read | Self::Update | Self::Cancel => grid.check_reserved(seat).map(|_| ()),
        }
    }
}

/// What the final notice of one pass shows.
enum Outcome {
    Done { details: Option<String> },
    Refused(SeatError),
}

impl<R, W> App<R, W>
where
    R: BufRead,
    W: Write,
{
    pub(super) fn create_reservation(&mut self) -> Result<()> {
        self.reservation_loop(Operation::Create)
    }

    pub(super) fn read_reservation(&mut self) -> Result<()> {
        self.reservation_loop(Operation::Read)
    }

    pub(super) fn update_reservation(&mut self) -> Result<()> {
        self.reservation_loop(Operation::Update)
    }

    pub(super) fn cancel_reservation(&mut self) -> Result<()> {
        self.reservation_loop(Operation::Cancel)
    }

    fn reservation_loop(&mut self, operation: Operation) -> Result<()> {
        loop {
            let Some(seat) = self.pick_seat(operation)? else {
                return Ok(());
            };

            let Some(outcome) = self.perform(operation, seat)? else {
                continue;
            };

            if self.show_outcome(operation, outcome)? == NoticeReply::Continue {
                return Ok(());
            }
        }
    }

    fn pick_seat(&mut self, operation: Operation) -> Result<Option<Seat>> {
        let (rows, columns) = self.grid.dimensions();
        let pair = RowColumnPrompt::builder()
            .title(format!("{}\n{}", operation.heading(), operation.seat_instruction()))
            .body(self.options_text([(0, "Return to Main Menu")]))
            .max_row(i64::try_from(rows).unwrap_or(i64::MAX))
            .max_column(i64::try_from(columns).unwrap_or(i64::MAX))
            .build()
            .run(&mut self.session, self.grid.snapshot())?;

        Ok(pair.committed().map(|(row, column)| {
            Seat::new(
                usize::try_from(row).unwrap_or_default(),
                usize::try_from(column).unwrap_or_default(),
            )
        }))
    }

    /// Checks `seat` and applies `operation`. `None` means the user backed
    /// out of the name/description step.
    fn perform(&mut self, operation: Operation, seat: Seat) -> Result<Option<Outcome>> {
        if let Err(err) = operation.check(&self.grid, seat) {
            return Ok(Some(Outcome::Refused(err)));
        }

        let result = match operation {
            Operation::Create | Operation::Update => {
                let Some(reservation) = self.ask_reservation(operation)? else {
                    return Ok(None);
                };
                let stored = if operation == Operation::Create {
                    self.grid.reserve(seat, reservation)
                } else {
                    self.grid.update(seat, reservation)
                };
                stored.map(|()| None)
            }
            Operation::Read => self
                .grid
                .check_reserved(seat)
                .map(|reservation| Some(self.details(reservation))),
            Operation::Cancel => self.grid.cancel(seat).map(|_| None),
        };

        Ok(Some(match result {
            Ok(details) => Outcome::Done { details },
            Err(err) => Outcome::Refused(err),
        }))
    }

    fn ask_reservation(&mut self, operation: Operation) -> Result<Option<Reservation>> {
        let pair = NameDescriptionPrompt::builder()
            .title(format!(
                "{}\nEnter the Name and Description for the reservation.",
                operation.heading()
            ))
            .body(self.options_text([(0, "Back to seat selection")]))
            .build()
            .run(&mut self.session, self.grid.snapshot())?;

        Ok(pair
            .committed()
            .map(|(name, description)| Reservation::new(name, description)))
    }

    fn details(&self, reservation: &Reservation) -> String {
        let text = format!(
            "This seat is reserved by:\n >> Name: {}\n >> Description: {}",
            reservation.name, reservation.description
        );
        let params = LayoutParams::new(self.session.screen.width()).with_padding(2);
        align(&text, &params, Alignment::Left)
    }

    fn show_outcome(&mut self, operation: Operation, outcome: Outcome) -> Result<NoticeReply> {
        let options = self.options_text([
            (AGAIN, operation.again_label()),
            ("Enter", "Return to Main Menu"),
        ]);
        let grid = self.grid.snapshot();

        match outcome {
            Outcome::Done { details } => {
                let title = format!("{}\n{}", operation.heading(), operation.done_message());
                let body = match details {
                    Some(details) => format!("\n{details}\n\n{options}"),
                    None => options,
                };
                notice(&mut self.session, grid, &title, &body, None, AGAIN)
            }
            Outcome::Refused(err) => {
                let message = err.to_string();
                notice(
                    &mut self.session,
                    grid,
                    operation.heading(),
                    &options,
                    Some(&message),
                    AGAIN,
                )
            }
        }
    }
}
