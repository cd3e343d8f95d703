//! Win detection: scans the lines through the just-played cell.

use crate::board::Board;
use crate::types::{Cell, Marker};
use tracing::instrument;

/// Returns the marker holding every cell of the line, if the line is won.
///
/// A line wins iff all N cells hold the same non-empty marker.
fn line_winner(line: &[Cell]) -> Option<Marker> {
    let first = line.first().copied()?.marker()?;
    line.iter()
        .all(|cell| *cell == Cell::Occupied(first))
        .then_some(first)
}

/// Checks for a winner among the lines passing through `(row, col)`.
///
/// Only four lines can contain the just-played cell: its row, its column,
/// and the two diagonals when the cell lies on them. Any winning line must
/// pass through the last move (the board was win-free before it), so this
/// O(N) scan is equivalent to a full-board sweep. Scanned in row, column,
/// main-diagonal, anti-diagonal order; the first winning line decides.
///
/// Coordinates outside the board pass through no lines and return `None`.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, row: usize, col: usize) -> Option<Marker> {
    if row >= board.size() || col >= board.size() {
        return None;
    }
    if let Some(marker) = line_winner(&board.row(row)) {
        return Some(marker);
    }
    if let Some(marker) = line_winner(&board.column(col)) {
        return Some(marker);
    }
    if row == col {
        if let Some(marker) = line_winner(&board.main_diagonal()) {
            return Some(marker);
        }
    }
    if row + col == board.size() - 1 {
        if let Some(marker) = line_winner(&board.anti_diagonal()) {
            return Some(marker);
        }
    }
    None
}
