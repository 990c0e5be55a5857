//! Path clearance for sliding pieces.
//!
//! Rooks, bishops and queens share one walk: step from the origin toward
//! the destination one square at a time and stop at the first occupied cell.
//! Both end squares are excluded from the walk.

use crate::game_state::chess_types::{Board, BoardLocation};

/// Signed `(d_row, d_col)` from `from` to `to`.
#[inline]
pub fn delta(from: BoardLocation, to: BoardLocation) -> (i8, i8) {
    (to.0 - from.0, to.1 - from.1)
}

/// True when `from` and `to` share a row, a column or a diagonal and differ.
#[inline]
pub fn is_aligned(from: BoardLocation, to: BoardLocation) -> bool {
    let (d_row, d_col) = delta(from, to);
    (d_row, d_col) != (0, 0) && (d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs())
}

/// True when every square strictly between `from` and `to` is empty.
///
/// Returns false for unaligned pairs, which no slider can connect.
pub fn is_path_clear(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    if !is_aligned(from, to) {
        return false;
    }

    let (d_row, d_col) = delta(from, to);
    let row_step = d_row.signum();
    let col_step = d_col.signum();

    let mut row = from.0 + row_step;
    let mut col = from.1 + col_step;
    while (row, col) != to {
        if !board.is_empty((row, col)) {
            return false;
        }
        row += row_step;
        col += col_step;
    }

    true
}
