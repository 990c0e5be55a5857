//! Exhaustive legal move enumeration.
//!
//! Every origin holding a piece of the requested color is tried against all
//! 64 destinations through the full legality check. That is at most 4096
//! checks per call, fine for an interactive game and for mate/stalemate
//! detection, but not meant to drive a search.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_validation::is_valid_move;

fn all_squares() -> impl Iterator<Item = BoardLocation> {
    (0..8).flat_map(|row| (0..8).map(move |col| (row, col)))
}

/// Squares the piece on `from` may legally move to. Empty for empty squares.
pub fn legal_destinations(game_state: &GameState, from: BoardLocation) -> Vec<BoardLocation> {
    if game_state.board.get(from).is_none() {
        return Vec::new();
    }
    all_squares()
        .filter(|&to| is_valid_move(game_state, from, to))
        .collect()
}

pub fn generate_legal_moves(game_state: &GameState, color: Color) -> Vec<ChessMove> {
    let mut moves = Vec::with_capacity(64);
    for piece in game_state.board.pieces().filter(|p| p.color == color) {
        let from = piece.location();
        moves.extend(
            legal_destinations(game_state, from)
                .into_iter()
                .map(|to| ChessMove::new(from, to)),
        );
    }
    moves
}

/// Short-circuits on the first legal move found.
pub fn has_legal_moves(game_state: &GameState, color: Color) -> bool {
    game_state
        .board
        .pieces()
        .filter(|p| p.color == color)
        .any(|p| all_squares().any(|to| is_valid_move(game_state, p.location(), to)))
}
