use crate::game_state::chess_types::{Board, BoardLocation};
use crate::moves::line_of_sight::{delta, is_path_clear};

/// Same row or column, nothing in between.
#[inline]
pub fn is_rook_move_legal(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    let (d_row, d_col) = delta(from, to);
    (d_row == 0) != (d_col == 0) && is_path_clear(board, from, to)
}
