//! Attack and check detection.
//!
//! Attacks are evaluated per piece with the same path rules as movement,
//! except pawns, which attack their two forward diagonals regardless of
//! what stands there. Self-check detection plays the candidate move on a
//! scratch copy of the grid; the caller's board is never touched.

use log::warn;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::castling_rook_columns;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::is_bishop_move_legal;
use crate::moves::king_moves::{is_castling_attempt, is_king_step};
use crate::moves::knight_moves::is_knight_move_legal;
use crate::moves::pawn_moves::{
    en_passant_victim_location, is_en_passant_capture, pawn_attacks_square,
};
use crate::moves::queen_moves::is_queen_move_legal;
use crate::moves::rook_moves::is_rook_move_legal;

/// True when `piece`, standing on `from`, attacks `target`.
pub fn piece_attacks_square(
    board: &Board,
    piece: &Piece,
    from: BoardLocation,
    target: BoardLocation,
) -> bool {
    match piece.kind {
        PieceKind::King => is_king_step(from, target),
        PieceKind::Queen => is_queen_move_legal(board, from, target),
        PieceKind::Rook => is_rook_move_legal(board, from, target),
        PieceKind::Bishop => is_bishop_move_legal(board, from, target),
        PieceKind::Knight => is_knight_move_legal(from, target),
        PieceKind::Pawn => pawn_attacks_square(piece.color, from, target),
    }
}

pub fn is_square_attacked(board: &Board, target: BoardLocation, attacker_color: Color) -> bool {
    board
        .pieces()
        .filter(|p| p.color == attacker_color)
        .any(|p| piece_attacks_square(board, &p, p.location(), target))
}

/// Whether `color`'s king is attacked.
///
/// A board without a `color` king reports "not in check"; use
/// [`try_is_king_in_check`] to surface that as an error instead.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match try_is_king_in_check(board, color) {
        Ok(in_check) => in_check,
        Err(err) => {
            warn!("check query treated as not-in-check: {err}");
            false
        }
    }
}

pub fn try_is_king_in_check(board: &Board, color: Color) -> Result<bool, ChessErrors> {
    let king = board
        .king_location(color)
        .ok_or(ChessErrors::MissingKing(color))?;
    Ok(is_square_attacked(board, king, color.opposite()))
}

/// Board as it would stand after moving the piece on `from` to `to`,
/// including the en-passant victim and the castling rook. No legality
/// checks are made and flags are left untouched.
pub fn board_after_move(
    board: &Board,
    en_passant_square: Option<BoardLocation>,
    from: BoardLocation,
    to: BoardLocation,
) -> Board {
    let mut scratch = *board;
    let Some(mover) = scratch.take(from) else {
        return scratch;
    };

    if mover.kind == PieceKind::Pawn
        && from.1 != to.1
        && is_en_passant_capture(board, mover.color, to, en_passant_square)
    {
        scratch.take(en_passant_victim_location(mover.color, to));
    }

    if mover.kind == PieceKind::King && is_castling_attempt(&mover, from, to) {
        let (rook_from, rook_to) = castling_rook_columns(from.1, to.1);
        let rook = scratch.take((from.0, rook_from));
        scratch.set((from.0, rook_to), rook);
    }

    scratch.set(to, Some(mover));
    scratch
}

pub fn would_leave_king_in_check(
    board: &Board,
    en_passant_square: Option<BoardLocation>,
    from: BoardLocation,
    to: BoardLocation,
    color: Color,
) -> bool {
    let scratch = board_after_move(board, en_passant_square, from, to);
    is_king_in_check(&scratch, color)
}
