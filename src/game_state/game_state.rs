//! Game state and the engine's public surface.
//!
//! `GameState` owns the grid, the side to move, the en-passant target and
//! the move history. Front-ends drive a game entirely through its methods:
//! read cells with `get_piece`, ask `is_valid_move` to highlight squares,
//! commit with `move_piece`, then query check, checkmate and stalemate.
//!
//! Mutation requires `&mut self`, so a move and every legality query it
//! performs run under one exclusive borrow; readers never observe a board
//! in the middle of a move.

use std::fmt;

use crate::chess_errors::{ChessErrors, MoveError};
use crate::game_state::chess_types::*;
use crate::move_generation::game_status::{self, GameStatus};
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::{is_king_in_check, try_is_king_in_check};
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, has_legal_moves, legal_destinations,
};
use crate::move_generation::legal_move_validation::{is_valid_move, validate_move};
use crate::utils::render_game_state::{render_game_state, RenderStyle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) en_passant_square: Option<BoardLocation>,
    pub(crate) move_history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, light to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Color::Light,
            en_passant_square: None,
            move_history: Vec::new(),
        }
    }

    /// Empty board for hand-built positions.
    pub fn new_empty(side_to_move: Color) -> Self {
        Self {
            board: Board::empty(),
            side_to_move,
            en_passant_square: None,
            move_history: Vec::new(),
        }
    }

    /// Start over from the standard position.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    pub fn place_piece(&mut self, piece: Piece) -> Result<(), ChessErrors> {
        self.board.add_piece(piece)
    }

    pub fn set_en_passant_square(
        &mut self,
        square: Option<BoardLocation>,
    ) -> Result<(), ChessErrors> {
        if let Some(location) = square.filter(|&l| !is_on_board(l)) {
            return Err(ChessErrors::OutOfBounds(location));
        }
        self.en_passant_square = square;
        Ok(())
    }

    /// Piece on `(row, col)`; `None` for empty or off-board squares.
    #[inline]
    pub fn get_piece(&self, row: i8, col: i8) -> Option<Piece> {
        self.board.get((row, col))
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<BoardLocation> {
        self.en_passant_square
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    pub fn is_valid_move(&self, from_row: i8, from_col: i8, to_row: i8, to_col: i8) -> bool {
        is_valid_move(self, (from_row, from_col), (to_row, to_col))
    }

    pub fn validate_move(&self, from: BoardLocation, to: BoardLocation) -> Result<(), MoveError> {
        validate_move(self, from, to).map(|_| ())
    }

    /// Play a move for the side to move. `false` means rejected and unchanged.
    pub fn move_piece(&mut self, from_row: i8, from_col: i8, to_row: i8, to_col: i8) -> bool {
        self.try_move_piece((from_row, from_col), (to_row, to_col)).is_ok()
    }

    pub fn try_move_piece(
        &mut self,
        from: BoardLocation,
        to: BoardLocation,
    ) -> Result<MoveRecord, MoveError> {
        apply_move(self, from, to).inspect_err(|err| {
            log::trace!("move {from:?} -> {to:?} refused: {err}");
        })
    }

    pub fn undo_last_move(&mut self) -> Option<MoveRecord> {
        undo_move(self)
    }

    pub fn legal_destinations(&self, from: BoardLocation) -> Vec<BoardLocation> {
        legal_destinations(self, from)
    }

    pub fn generate_legal_moves(&self, color: Color) -> Vec<ChessMove> {
        generate_legal_moves(self, color)
    }

    pub fn has_legal_moves(&self, color: Color) -> bool {
        has_legal_moves(self, color)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }

    /// Like `is_in_check`, but a missing king is an error.
    pub fn try_is_in_check(&self, color: Color) -> Result<bool, ChessErrors> {
        try_is_king_in_check(&self.board, color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        game_status::is_checkmate(self, color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        game_status::is_stalemate(self, color)
    }

    /// Status for the side to move.
    pub fn game_status(&self) -> GameStatus {
        game_status::game_status(self, self.side_to_move)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self, RenderStyle::Ascii))
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::GameState;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    fn assert_cells_match_coordinates(game: &GameState) {
        for row in 0..8 {
            for col in 0..8 {
                if let Some(piece) = game.get_piece(row, col) {
                    assert_eq!(piece.location(), (row, col));
                }
            }
        }
        assert!(game.board().pieces().count() <= 32);
    }

    #[test]
    fn new_game_reports_light_to_move_and_no_history() {
        let game = GameState::new_game();
        assert_eq!(game.current_turn(), Color::Light);
        assert_eq!(game.en_passant_square(), None);
        assert!(game.move_history().is_empty());
        assert_eq!(
            game.get_piece(0, 4).map(|p| (p.kind, p.color)),
            Some((PieceKind::King, Color::Light))
        );
    }

    #[test]
    fn get_piece_degrades_to_none_off_board() {
        let game = GameState::new_game();
        assert!(game.get_piece(-1, 0).is_none());
        assert!(game.get_piece(0, 8).is_none());
        assert!(game.get_piece(8, 8).is_none());
    }

    #[test]
    fn opening_pawn_push_hands_the_turn_to_dark() {
        let mut game = GameState::new_game();
        assert!(game.move_piece(1, 4, 3, 4));
        assert_eq!(game.current_turn(), Color::Dark);
        assert_eq!(game.en_passant_square(), Some((2, 4)));
        assert_eq!(game.move_history().len(), 1);
    }

    #[test]
    fn reset_discards_progress() {
        let mut game = GameState::new_game();
        assert!(game.move_piece(1, 4, 3, 4));
        game.reset();
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn hand_built_positions_validate_their_input() {
        let mut game = GameState::new_empty(Color::Dark);
        game.place_piece(Piece::new(PieceKind::King, Color::Dark, 7, 4))
            .expect("empty square");
        assert_eq!(
            game.place_piece(Piece::new(PieceKind::Queen, Color::Light, 7, 4)),
            Err(ChessErrors::SquareOccupied((7, 4), PieceKind::King))
        );
        assert_eq!(
            game.place_piece(Piece::new(PieceKind::Queen, Color::Light, 9, 0)),
            Err(ChessErrors::OutOfBounds((9, 0)))
        );
        assert_eq!(
            game.set_en_passant_square(Some((8, 0))),
            Err(ChessErrors::OutOfBounds((8, 0)))
        );
        assert_eq!(
            game.try_is_in_check(Color::Light),
            Err(ChessErrors::MissingKing(Color::Light))
        );
        assert!(!game.is_in_check(Color::Light));
    }

    #[test]
    fn random_playouts_keep_board_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..12 {
            let mut game = GameState::new_game();
            for _ in 0..80 {
                let side = game.current_turn();
                let moves = game.generate_legal_moves(side);
                if moves.is_empty() {
                    assert!(game.game_status().is_terminal());
                    break;
                }

                let before = game.clone();
                let mv = moves[rng.random_range(0..moves.len())];
                let record = game
                    .try_move_piece(mv.from, mv.to)
                    .expect("generated move should be accepted");

                assert_eq!(game.current_turn(), side.opposite());
                assert_eq!(record.from, mv.from);
                assert!(game.get_piece(mv.from.0, mv.from.1).is_none());
                assert!(!game.is_in_check(side));
                assert_cells_match_coordinates(&game);

                let mut rewound = game.clone();
                rewound.undo_last_move().expect("a move was just played");
                assert_eq!(rewound, before);
            }
        }
    }

    #[test]
    fn random_rejections_leave_state_untouched() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut game = GameState::new_game();
        for _ in 0..40 {
            let side = game.current_turn();
            for _ in 0..50 {
                let from = (rng.random_range(0..8), rng.random_range(0..8));
                let to = (rng.random_range(0..8), rng.random_range(0..8));
                let valid = game.is_valid_move(from.0, from.1, to.0, to.1);
                let own_piece = game.get_piece(from.0, from.1).is_some_and(|p| p.color == side);
                let mut probe = game.clone();
                let accepted = probe.move_piece(from.0, from.1, to.0, to.1);
                assert_eq!(accepted, valid && own_piece);
                if !accepted {
                    assert_eq!(probe, game);
                }
            }

            let moves = game.generate_legal_moves(side);
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.random_range(0..moves.len())];
            assert!(game.move_piece(mv.from.0, mv.from.1, mv.to.0, mv.to.1));
        }
    }
}
