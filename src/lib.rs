//! Crate root module declarations for the chess_arbiter rules engine.
//!
//! The engine is a legality oracle and move-execution state machine: board
//! state, per-piece movement rules, attack and check detection, move
//! execution with castling, en passant and promotion, and checkmate or
//! stalemate detection. Presentation layers consume it through `GameState`.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod move_record;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod line_of_sight;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_validation;
    pub mod legal_moves_king;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}

pub use chess_errors::{ChessErrors, MoveError};
pub use game_state::chess_types::{
    BoardLocation, ChessMove, Color, GameState, MoveRecord, Piece, PieceKind,
};
pub use move_generation::game_status::GameStatus;
