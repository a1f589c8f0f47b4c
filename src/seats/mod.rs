//! Seat storage and the seat map shown on the layout screen.

mod grid;
mod map;

use derive_more::Display;

pub use grid::{DEFAULT_COLUMNS, DEFAULT_ROWS, Reservation, SeatError, SeatGrid};
pub use map::{MapTooWide, seat_map};

use crate::tui::GridSnapshot;

/// A seat position as the user types it: both coordinates start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("[{row}, {column}]")]
pub struct Seat {
    pub row: usize,
    pub column: usize,
}

impl Seat {
    #[must_use]
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Seat at 0-based storage indices.
    #[must_use]
    pub fn from_index(row: usize, column: usize) -> Self {
        Self::new(row.saturating_add(1), column.saturating_add(1))
    }
}

/// What the screen needs to know about the seats.
pub trait GridView {
    /// `(rows, columns)`.
    fn dimensions(&self) -> (usize, usize);

    fn occupied_count(&self) -> usize;

    /// Whether `row`/`column` (1-based) name a seat of the grid.
    fn is_valid_coordinate(&self, row: usize, column: usize) -> bool;

    /// Values for the HUD status line.
    fn snapshot(&self) -> GridSnapshot {
        let (rows, columns) = self.dimensions();
        GridSnapshot {
            rows,
            columns,
            occupied: self.occupied_count(),
        }
    }
}
