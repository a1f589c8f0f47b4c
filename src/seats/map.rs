use derive_more::{Display, Error};

use super::{GridView, SeatGrid};
use crate::tui::format::{Alignment, LayoutParams, align_lines};

const FREE: char = 'O';
const RESERVED: char = 'X';

/// The grid has more columns than the HUD can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("The columns of the seat layout exceeds the HUD length!")]
pub struct MapTooWide;

/// Last digit of a 0-based index counted from 1: 1..9, 0, 1..
fn label(index: usize) -> char {
    let digit = index.saturating_add(1).checked_rem(10).unwrap_or_default();
    char::from_digit(u32::try_from(digit).unwrap_or_default(), 10).unwrap_or('0')
}

/// Renders the seat map centered in `width` columns.
///
/// The first line numbers the columns, every following line starts with the
/// row number and shows `O` for a free and `X` for a reserved seat. Cells are
/// separated by a space when the map fits that way, packed otherwise.
pub fn seat_map(grid: &SeatGrid, width: usize) -> Result<String, MapTooWide> {
    let (rows, columns) = grid.dimensions();

    let separator = if columns.saturating_mul(2).saturating_add(1) <= width {
        " "
    } else if columns.saturating_add(1) <= width {
        ""
    } else {
        return Err(MapTooWide);
    };

    let mut lines = Vec::with_capacity(rows.saturating_add(1));

    let mut header = String::from(" ");
    for column in 0..columns {
        header.push_str(separator);
        header.push(label(column));
    }
    lines.push(header);

    for row in 0..rows {
        let mut line = String::from(label(row));
        for reserved in grid.row_occupancy(row) {
            line.push_str(separator);
            line.push(if reserved { RESERVED } else { FREE });
        }
        lines.push(line);
    }

    let line_width = columns
        .saturating_mul(separator.len().saturating_add(1))
        .saturating_add(1);
    let params = LayoutParams::new(width).with_explicit_length(line_width);
    Ok(align_lines(&lines, &params, Alignment::Center))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::seats::{Reservation, Seat};

    #[test]
    fn test_labels_wrap_after_nine() {
        let labels: String = (0..12).map(label).collect();
        assert_eq!(labels, "123456789012");
    }

    #[test]
    fn test_spaced_map() {
        let mut grid = SeatGrid::new(2, 3);
        grid.reserve(Seat::new(2, 3), Reservation::new("Jane", ""))
            .unwrap();

        let map = seat_map(&grid, 7).unwrap();
        assert_eq!(map, "  1 2 3\n1 O O O\n2 O O X\n");
    }

    #[test]
    fn test_map_is_centered() {
        let grid = SeatGrid::new(1, 2);
        let map = seat_map(&grid, 9).unwrap();
        assert_eq!(map, "    1 2  \n  1 O O  \n");
    }

    #[test]
    fn test_packed_map_when_spacing_does_not_fit() {
        let grid = SeatGrid::new(1, 4);
        let map = seat_map(&grid, 6).unwrap();
        assert_eq!(map, " 1234 \n1OOOO \n");
    }

    #[test]
    fn test_map_too_wide() {
        let grid = SeatGrid::new(1, 60);
        assert_eq!(seat_map(&grid, 60), Err(MapTooWide));
        assert_eq!(
            MapTooWide.to_string(),
            "The columns of the seat layout exceeds the HUD length!"
        );
    }

    #[test]
    fn test_hundred_columns_fit_packed_at_max_width() {
        let grid = SeatGrid::new(1, 99);
        let map = seat_map(&grid, 100).unwrap();
        assert!(map.lines().all(|line| line.len() == 100));
    }
}
