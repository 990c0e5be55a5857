//! King step geometry.
//!
//! Only the shape of a king move lives here. Whether a two-column shift is an
//! allowed castle depends on attacks and is decided in
//! `move_generation::legal_moves_king`.

use crate::game_state::chess_rules::{CASTLING_KING_STEP, KING_HOME_COL};
use crate::game_state::chess_types::{BoardLocation, Piece};
use crate::moves::line_of_sight::delta;

/// One square in any direction.
#[inline]
pub fn is_king_step(from: BoardLocation, to: BoardLocation) -> bool {
    let (d_row, d_col) = delta(from, to);
    d_row.abs().max(d_col.abs()) == 1
}

/// Two-column horizontal shift by a king that has never moved, starting
/// from its home square.
#[inline]
pub fn is_castling_attempt(king: &Piece, from: BoardLocation, to: BoardLocation) -> bool {
    let (d_row, d_col) = delta(from, to);
    from == (king.color.back_row(), KING_HOME_COL)
        && d_row == 0
        && d_col.abs() == CASTLING_KING_STEP
        && !king.has_moved
}
