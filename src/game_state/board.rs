//! The 8×8 piece grid.
//!
//! `Board` is a plain `Copy` value so that check detection can play a
//! hypothetical move on a scratch copy and throw it away.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard starting layout.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK_LAYOUT.iter().copied().enumerate() {
            let col = col as i8;
            for color in [Color::Light, Color::Dark] {
                let back = color.back_row();
                let pawns = color.pawn_start_row();
                board.set((back, col), Some(Piece::new(kind, color, back, col)));
                board.set(
                    (pawns, col),
                    Some(Piece::new(PieceKind::Pawn, color, pawns, col)),
                );
            }
        }
        board
    }

    /// Piece at `location`, or `None` for empty and off-board squares.
    #[inline]
    pub fn get(&self, location: BoardLocation) -> Option<Piece> {
        if !is_on_board(location) {
            return None;
        }
        self.cells[location.0 as usize][location.1 as usize]
    }

    #[inline]
    pub fn is_empty(&self, location: BoardLocation) -> bool {
        self.get(location).is_none()
    }

    /// Overwrite a cell. A stored piece has its coordinates rewritten to the
    /// cell. Off-board writes are ignored.
    #[inline]
    pub fn set(&mut self, location: BoardLocation, piece: Option<Piece>) {
        if !is_on_board(location) {
            return;
        }
        self.cells[location.0 as usize][location.1 as usize] = piece.map(|mut p| {
            p.row = location.0;
            p.col = location.1;
            p
        });
    }

    /// Clear a cell and return what was there.
    #[inline]
    pub fn take(&mut self, location: BoardLocation) -> Option<Piece> {
        let piece = self.get(location);
        self.set(location, None);
        piece
    }

    /// Put `piece` on its own `(row, col)`, refusing occupied or off-board cells.
    pub fn add_piece(&mut self, piece: Piece) -> Result<(), ChessErrors> {
        let location = piece.location();
        if !is_on_board(location) {
            return Err(ChessErrors::OutOfBounds(location));
        }
        if let Some(existing) = self.get(location) {
            return Err(ChessErrors::SquareOccupied(location, existing.kind));
        }
        self.set(location, Some(piece));
        Ok(())
    }

    /// Every piece on the board in row-major order from `(0, 0)`.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flatten().filter_map(|cell| *cell)
    }

    /// Location of the first `color` king found in row-major order.
    pub fn king_location(&self, color: Color) -> Option<BoardLocation> {
        self.pieces()
            .find(|p| p.kind == PieceKind::King && p.color == color)
            .map(|p| p.location())
    }
}
