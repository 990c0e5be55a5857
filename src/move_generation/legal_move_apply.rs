//! Move execution and take-back.
//!
//! `apply_move` is the only mutator of a game in progress. It validates the
//! request in full before touching anything, so a rejected move leaves the
//! state exactly as it was.

use log::debug;

use crate::chess_errors::MoveError;
use crate::game_state::chess_rules::castling_rook_columns;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_validation::validate_move;
use crate::moves::king_moves::is_castling_attempt;
use crate::moves::pawn_moves::{en_passant_victim_location, is_double_step, is_en_passant_capture};

pub fn apply_move(
    game_state: &mut GameState,
    from: BoardLocation,
    to: BoardLocation,
) -> Result<MoveRecord, MoveError> {
    if !is_on_board(from) {
        return Err(MoveError::OutOfBounds(from));
    }
    let piece = game_state
        .board
        .get(from)
        .ok_or(MoveError::NoPieceAtOrigin(from))?;
    if piece.color != game_state.side_to_move {
        return Err(MoveError::WrongTurn {
            expected: game_state.side_to_move,
            found: piece.color,
        });
    }
    validate_move(game_state, from, to)?;

    let prev_en_passant_square = game_state.en_passant_square;
    let board = &mut game_state.board;
    let mut captured = board.get(to);

    let is_en_passant = piece.kind == PieceKind::Pawn
        && from.1 != to.1
        && is_en_passant_capture(board, piece.color, to, prev_en_passant_square);
    if is_en_passant {
        captured = board.take(en_passant_victim_location(piece.color, to));
    }

    let is_castling = piece.kind == PieceKind::King && is_castling_attempt(&piece, from, to);
    if is_castling {
        let (rook_from, rook_to) = castling_rook_columns(from.1, to.1);
        if let Some(mut rook) = board.take((from.0, rook_from)) {
            rook.has_moved = true;
            board.set((from.0, rook_to), Some(rook));
        }
    }

    board.take(from);
    let mut moved = piece;
    moved.has_moved = true;
    board.set(to, Some(moved));

    game_state.en_passant_square = if piece.kind == PieceKind::Pawn && is_double_step(from, to) {
        Some(((from.0 + to.0) / 2, from.1))
    } else {
        None
    };

    let promoted_to = if piece.kind == PieceKind::Pawn && to.0 == piece.color.promotion_row() {
        game_state.board.set(
            to,
            Some(Piece::new(PieceKind::Queen, piece.color, to.0, to.1)),
        );
        Some(PieceKind::Queen)
    } else {
        None
    };

    let record = MoveRecord {
        piece,
        from,
        to,
        captured,
        is_en_passant,
        is_castling,
        promoted_to,
        prev_en_passant_square,
    };
    game_state.move_history.push(record);
    game_state.side_to_move = piece.color.opposite();

    debug!(
        "{} {} {from:?} -> {to:?} captured={:?} en_passant={is_en_passant} castling={is_castling} promotion={promoted_to:?}",
        piece.color,
        piece.kind,
        captured.map(|p| p.kind),
    );

    Ok(record)
}

/// Take back the most recent move, restoring the exact prior position.
pub fn undo_move(game_state: &mut GameState) -> Option<MoveRecord> {
    let record = game_state.move_history.pop()?;
    let board = &mut game_state.board;

    board.take(record.to);
    board.set(record.from, Some(record.piece));

    if let Some(captured) = record.captured {
        board.set(captured.location(), Some(captured));
    }

    if record.is_castling {
        let (rook_from, rook_to) = castling_rook_columns(record.from.1, record.to.1);
        if let Some(mut rook) = board.take((record.from.0, rook_to)) {
            rook.has_moved = false;
            board.set((record.from.0, rook_from), Some(rook));
        }
    }

    game_state.en_passant_square = record.prev_en_passant_square;
    game_state.side_to_move = record.mover();

    debug!("undo {} {:?} -> {:?}", record.piece.kind, record.from, record.to);
    Some(record)
}
