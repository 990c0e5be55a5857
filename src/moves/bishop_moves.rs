use crate::game_state::chess_types::{Board, BoardLocation};
use crate::moves::line_of_sight::{delta, is_path_clear};

/// Non-zero diagonal, nothing in between.
#[inline]
pub fn is_bishop_move_legal(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    let (d_row, d_col) = delta(from, to);
    d_row != 0 && d_row.abs() == d_col.abs() && is_path_clear(board, from, to)
}
