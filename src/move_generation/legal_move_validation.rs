//! Full legality of a single requested move.
//!
//! A move is legal when the destination is not held by a friendly piece,
//! the piece's movement pattern allows it, and it does not leave the mover's
//! king attacked. Turn order is checked separately by move execution, so
//! front-ends can ask about either side's pieces.

use log::trace;

use crate::chess_errors::MoveError;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::would_leave_king_in_check;
use crate::move_generation::legal_moves_king::is_king_move_legal;
use crate::moves::bishop_moves::is_bishop_move_legal;
use crate::moves::knight_moves::is_knight_move_legal;
use crate::moves::pawn_moves::is_pawn_move_legal;
use crate::moves::queen_moves::is_queen_move_legal;
use crate::moves::rook_moves::is_rook_move_legal;

/// Movement-pattern legality for `piece` on `from`, ignoring check safety.
///
/// Usable on its own, so it applies the friendly-destination rule itself.
pub fn is_piece_move_legal(
    game_state: &GameState,
    piece: &Piece,
    from: BoardLocation,
    to: BoardLocation,
) -> bool {
    let board = &game_state.board;
    if board.get(to).is_some_and(|target| target.color == piece.color) {
        return false;
    }

    match piece.kind {
        PieceKind::King => is_king_move_legal(board, piece, from, to),
        PieceKind::Queen => is_queen_move_legal(board, from, to),
        PieceKind::Rook => is_rook_move_legal(board, from, to),
        PieceKind::Bishop => is_bishop_move_legal(board, from, to),
        PieceKind::Knight => is_knight_move_legal(from, to),
        PieceKind::Pawn => {
            is_pawn_move_legal(board, piece, from, to, game_state.en_passant_square)
        }
    }
}

/// Check every legality rule and return the moving piece, or the first rule broken.
pub fn validate_move(
    game_state: &GameState,
    from: BoardLocation,
    to: BoardLocation,
) -> Result<Piece, MoveError> {
    for location in [from, to] {
        if !is_on_board(location) {
            return Err(MoveError::OutOfBounds(location));
        }
    }

    let board = &game_state.board;
    let piece = board.get(from).ok_or(MoveError::NoPieceAtOrigin(from))?;

    if board.get(to).is_some_and(|target| target.color == piece.color) {
        return Err(MoveError::DestinationOccupiedByOwnPiece(to));
    }

    if !is_piece_move_legal(game_state, &piece, from, to) {
        return Err(MoveError::IllegalPieceMovement {
            kind: piece.kind,
            from,
            to,
        });
    }

    if would_leave_king_in_check(board, game_state.en_passant_square, from, to, piece.color) {
        return Err(MoveError::LeavesKingInCheck);
    }

    Ok(piece)
}

pub fn is_valid_move(game_state: &GameState, from: BoardLocation, to: BoardLocation) -> bool {
    match validate_move(game_state, from, to) {
        Ok(_) => true,
        Err(err) => {
            trace!("{from:?} -> {to:?} rejected: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid_move, validate_move};
    use crate::chess_errors::MoveError;
    use crate::game_state::chess_types::{Color, GameState, Piece, PieceKind};

    #[test]
    fn start_position_rejections_carry_reasons() {
        let game = GameState::new_game();
        assert_eq!(
            validate_move(&game, (2, 4), (3, 4)),
            Err(MoveError::NoPieceAtOrigin((2, 4)))
        );
        assert_eq!(
            validate_move(&game, (0, 0), (1, 0)),
            Err(MoveError::DestinationOccupiedByOwnPiece((1, 0)))
        );
        assert_eq!(
            validate_move(&game, (0, 2), (2, 4)),
            Err(MoveError::IllegalPieceMovement {
                kind: PieceKind::Bishop,
                from: (0, 2),
                to: (2, 4),
            })
        );
        assert_eq!(
            validate_move(&game, (1, 4), (8, 4)),
            Err(MoveError::OutOfBounds((8, 4)))
        );
        assert_eq!(
            validate_move(&game, (-1, 0), (0, 0)),
            Err(MoveError::OutOfBounds((-1, 0)))
        );
    }

    #[test]
    fn knight_jumps_over_the_pawn_wall() {
        let game = GameState::new_game();
        assert!(is_valid_move(&game, (0, 1), (2, 2)));
        assert!(is_valid_move(&game, (0, 6), (2, 5)));
        assert!(!is_valid_move(&game, (0, 1), (1, 3)));
    }

    #[test]
    fn validity_does_not_depend_on_whose_turn_it_is() {
        let game = GameState::new_game();
        assert!(is_valid_move(&game, (6, 4), (4, 4)));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut game = GameState::new_empty(Color::Light);
        for piece in [
            Piece::new(PieceKind::King, Color::Light, 0, 4),
            Piece::new(PieceKind::Rook, Color::Dark, 7, 5),
            Piece::new(PieceKind::King, Color::Dark, 7, 0),
        ] {
            game.place_piece(piece).expect("square should be free");
        }
        assert_eq!(
            validate_move(&game, (0, 4), (0, 5)),
            Err(MoveError::LeavesKingInCheck)
        );
        assert!(is_valid_move(&game, (0, 4), (0, 3)));
    }

    #[test]
    fn repeated_queries_do_not_change_the_answer_or_the_state() {
        let game = GameState::new_game();
        let snapshot = game.clone();
        for _ in 0..3 {
            assert!(is_valid_move(&game, (1, 3), (3, 3)));
            assert!(!is_valid_move(&game, (1, 3), (4, 3)));
        }
        assert_eq!(game, snapshot);
    }
}
