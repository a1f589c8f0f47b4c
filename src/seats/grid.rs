use derive_more::{Display, Error};
use log::info;

use super::{GridView, Seat};

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLUMNS: usize = 10;

/// Who holds a seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub name: String,
    pub description: String,
}

impl Reservation {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Why a seat operation was refused. The message is shown to the user as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SeatError {
    #[display("The seat {_0} does not exist.")]
    DoesNotExist(#[error(not(source))] Seat),
    #[display("The seat {_0} is already reserved.")]
    AlreadyReserved(#[error(not(source))] Seat),
    #[display("The seat {_0} is not reserved.")]
    NotReserved(#[error(not(source))] Seat),
}

/// Row-major seat storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGrid {
    rows: usize,
    columns: usize,
    seats: Vec<Option<Reservation>>,
}

impl Default for SeatGrid {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}

impl SeatGrid {
    /// An empty grid. A zero dimension gives a grid without seats.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            seats: vec![None; rows.saturating_mul(columns)],
        }
    }

    /// Changes the dimensions, keeping every reservation inside the new
    /// bounds. Returns how many reservations were dropped.
    pub fn resize(&mut self, rows: usize, columns: usize) -> usize {
        let mut seats = vec![None; rows.saturating_mul(columns)];
        let mut dropped = 0usize;
        let old_columns = self.columns;

        for (index, slot) in self.seats.iter_mut().enumerate() {
            let Some(reservation) = slot.take() else {
                continue;
            };
            let row = index.checked_div(old_columns).unwrap_or_default();
            let column = index.checked_rem(old_columns).unwrap_or_default();
            let target = if row < rows && column < columns {
                seats.get_mut(row.saturating_mul(columns).saturating_add(column))
            } else {
                None
            };
            match target {
                Some(target) => *target = Some(reservation),
                None => {
                    info!(
                        "resize drops reservation of '{}' at {}",
                        reservation.name,
                        Seat::from_index(row, column)
                    );
                    dropped = dropped.saturating_add(1);
                }
            }
        }

        info!(
            "seat layout resized from {}x{} to {rows}x{columns}",
            self.rows, self.columns
        );
        self.rows = rows;
        self.columns = columns;
        self.seats = seats;
        dropped
    }

    /// The reservation on `seat`, `None` when the seat is free.
    pub fn get(&self, seat: Seat) -> Result<Option<&Reservation>, SeatError> {
        let index = self.index(seat).ok_or(SeatError::DoesNotExist(seat))?;
        Ok(self.seats.get(index).and_then(Option::as_ref))
    }

    /// Reserves a free seat.
    pub fn reserve(&mut self, seat: Seat, reservation: Reservation) -> Result<(), SeatError> {
        let slot = self.slot(seat)?;
        if slot.is_some() {
            return Err(SeatError::AlreadyReserved(seat));
        }
        info!("seat {seat} reserved by '{}'", reservation.name);
        *slot = Some(reservation);
        Ok(())
    }

    /// Replaces the reservation on an occupied seat.
    pub fn update(&mut self, seat: Seat, reservation: Reservation) -> Result<(), SeatError> {
        let slot = self.slot(seat)?;
        if slot.is_none() {
            return Err(SeatError::NotReserved(seat));
        }
        info!("seat {seat} updated to '{}'", reservation.name);
        *slot = Some(reservation);
        Ok(())
    }

    /// Frees an occupied seat and returns its former reservation.
    pub fn cancel(&mut self, seat: Seat) -> Result<Reservation, SeatError> {
        let reservation = self.slot(seat)?.take().ok_or(SeatError::NotReserved(seat))?;
        info!("seat {seat} cancelled ('{}')", reservation.name);
        Ok(reservation)
    }

    /// Checks that `seat` exists, then that it can be reserved.
    pub fn check_free(&self, seat: Seat) -> Result<(), SeatError> {
        match self.get(seat)? {
            Some(_) => Err(SeatError::AlreadyReserved(seat)),
            None => Ok(()),
        }
    }

    /// Checks that `seat` exists, then that it holds a reservation.
    pub fn check_reserved(&self, seat: Seat) -> Result<&Reservation, SeatError> {
        self.get(seat)?.ok_or(SeatError::NotReserved(seat))
    }

    /// Whether each seat of `row` (0-based) is reserved, left to right.
    pub fn row_occupancy(&self, row: usize) -> impl Iterator<Item = bool> + '_ {
        let start = row.saturating_mul(self.columns);
        self.seats
            .iter()
            .skip(start)
            .take(if row < self.rows { self.columns } else { 0 })
            .map(Option::is_some)
    }

    fn index(&self, seat: Seat) -> Option<usize> {
        if !self.is_valid_coordinate(seat.row, seat.column) {
            return None;
        }
        let row = seat.row.checked_sub(1)?;
        let column = seat.column.checked_sub(1)?;
        row.checked_mul(self.columns)?.checked_add(column)
    }

    fn slot(&mut self, seat: Seat) -> Result<&mut Option<Reservation>, SeatError> {
        let index = self.index(seat).ok_or(SeatError::DoesNotExist(seat))?;
        self.seats.get_mut(index).ok_or(SeatError::DoesNotExist(seat))
    }
}

impl GridView for SeatGrid {
    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|seat| seat.is_some()).count()
    }

    fn is_valid_coordinate(&self, row: usize, column: usize) -> bool {
        (1..=self.rows).contains(&row) && (1..=self.columns).contains(&column)
    }
}
