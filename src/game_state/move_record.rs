use crate::game_state::chess_types::*;

/// History entry appended for every executed move.
///
/// Holds enough to take the move back exactly: the mover as it stood before
/// the move, any captured piece with its own coordinates (the en-passant
/// victim does not sit on `to`), and the en-passant square that was in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub piece: Piece,
    pub from: BoardLocation,
    pub to: BoardLocation,
    pub captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castling: bool,
    pub promoted_to: Option<PieceKind>,
    pub prev_en_passant_square: Option<BoardLocation>,
}

impl MoveRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn mover(&self) -> Color {
        self.piece.color
    }
}
