//! King legality, including castling.
//!
//! Castling is only considered for a two-column shift by an unmoved king.
//! The king must not be in check, the matching rook must be unmoved on its
//! corner, the squares between them must be empty, and no square the king
//! stands on or crosses (origin and destination included) may be attacked.

use crate::game_state::chess_rules::castling_rook_columns;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::moves::king_moves::{is_castling_attempt, is_king_step};

pub fn is_king_move_legal(
    board: &Board,
    king: &Piece,
    from: BoardLocation,
    to: BoardLocation,
) -> bool {
    if is_king_step(from, to) {
        return true;
    }
    is_castling_attempt(king, from, to) && can_castle(board, king, from, to)
}

pub fn can_castle(board: &Board, king: &Piece, from: BoardLocation, to: BoardLocation) -> bool {
    let color = king.color;
    let row = from.0;

    if is_king_in_check(board, color) {
        return false;
    }

    let (rook_col, _) = castling_rook_columns(from.1, to.1);
    let rook_ready = board.get((row, rook_col)).is_some_and(|rook| {
        rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved
    });
    if !rook_ready {
        return false;
    }

    let (low, high) = (from.1.min(rook_col), from.1.max(rook_col));
    if ((low + 1)..high).any(|col| !board.is_empty((row, col))) {
        return false;
    }

    let step = (to.1 - from.1).signum();
    let mut col = from.1;
    loop {
        if is_square_attacked(board, (row, col), color.opposite()) {
            return false;
        }
        if col == to.1 {
            return true;
        }
        col += step;
    }
}
