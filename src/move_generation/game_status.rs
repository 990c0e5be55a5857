//! Game-end evaluation.
//!
//! Checkmate and stalemate are derived from the position alone. The engine
//! does not lock the board on a terminal status; `move_piece` simply has no
//! legal move left to accept.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(text)
    }
}

pub fn game_status(game_state: &GameState, color: Color) -> GameStatus {
    let in_check = is_king_in_check(&game_state.board, color);
    let can_move = has_legal_moves(game_state, color);
    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Ongoing,
    }
}

pub fn is_checkmate(game_state: &GameState, color: Color) -> bool {
    is_king_in_check(&game_state.board, color) && !has_legal_moves(game_state, color)
}

pub fn is_stalemate(game_state: &GameState, color: Color) -> bool {
    !is_king_in_check(&game_state.board, color) && !has_legal_moves(game_state, color)
}
