//! Errors used throughout the rules engine.
//!
//! Two enums split the failure space:
//! - `MoveError` explains why a move request was rejected. Rejections are
//!   frequent and expected (most clicks in a UI are not legal moves), and a
//!   rejected request never changes the game state.
//! - `ChessErrors` covers everything else: building positions by hand,
//!   parsing coordinates, and the strict king lookup.

use thiserror::Error;

use crate::game_state::chess_types::{BoardLocation, Color, PieceKind};

/// Reason a move request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// One of the coordinates lies outside `0..=7`.
    #[error("square {0:?} is off the board")]
    OutOfBounds(BoardLocation),

    /// The origin square is empty.
    #[error("no piece on {0:?}")]
    NoPieceAtOrigin(BoardLocation),

    /// The piece on the origin square belongs to the side not on move.
    #[error("it is {expected}'s turn, but the piece is {found}")]
    WrongTurn { expected: Color, found: Color },

    /// The destination holds a piece of the mover's own color.
    #[error("{0:?} is occupied by a piece of the same color")]
    DestinationOccupiedByOwnPiece(BoardLocation),

    /// The piece cannot reach the destination under its movement rules
    /// (including blocked paths and failed castling preconditions).
    #[error("a {kind} cannot move from {from:?} to {to:?}")]
    IllegalPieceMovement {
        kind: PieceKind,
        from: BoardLocation,
        to: BoardLocation,
    },

    /// The move would leave (or keep) the mover's king under attack.
    #[error("the move would leave the king in check")]
    LeavesKingInCheck,
}

/// Non-move failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// Attempted to place a piece outside the board.
    #[error("square {0:?} is off the board")]
    OutOfBounds(BoardLocation),

    /// Attempted to place a piece on an occupied square.
    #[error("square {0:?} is already occupied by a {1}")]
    SquareOccupied(BoardLocation, PieceKind),

    /// A coordinate string such as `e4` or `e2e4` could not be parsed.
    #[error("invalid algebraic coordinate: {0}")]
    InvalidAlgebraic(String),

    /// The board holds no king of the given color.
    ///
    /// Only reported by the strict lookups; the lenient check query treats a
    /// missing king as "not in check".
    #[error("no {0} king on the board")]
    MissingKing(Color),
}

#[cfg(test)]
mod tests {
    use super::{ChessErrors, MoveError};
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn messages_name_the_offending_detail() {
        let wrong_turn = MoveError::WrongTurn {
            expected: Color::Light,
            found: Color::Dark,
        };
        assert_eq!(wrong_turn.to_string(), "it is white's turn, but the piece is black");

        let illegal = MoveError::IllegalPieceMovement {
            kind: PieceKind::Knight,
            from: (0, 1),
            to: (1, 1),
        };
        assert!(illegal.to_string().contains("knight"));

        assert_eq!(
            ChessErrors::MissingKing(Color::Dark).to_string(),
            "no black king on the board"
        );
    }
}
