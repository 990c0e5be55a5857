//! Canonical chess-rule constants.
//!
//! Static layout and column literals used to set up the starting position
//! and to locate the castling rooks.

use crate::game_state::chess_types::PieceKind;

/// Back-rank layout from the a-file to the h-file, identical for both sides.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column of both kings in the starting position; castling starts only from here.
pub const KING_HOME_COL: i8 = 4;

pub const KINGSIDE_ROOK_COL: i8 = 7;
pub const KINGSIDE_ROOK_TARGET_COL: i8 = 5;
pub const QUEENSIDE_ROOK_COL: i8 = 0;
pub const QUEENSIDE_ROOK_TARGET_COL: i8 = 3;

/// Column distance a king covers when castling.
pub const CASTLING_KING_STEP: i8 = 2;

/// Rook origin and destination columns for a castling king heading to `king_to_col`.
#[inline]
pub const fn castling_rook_columns(king_from_col: i8, king_to_col: i8) -> (i8, i8) {
    if king_to_col > king_from_col {
        (KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TARGET_COL)
    } else {
        (QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TARGET_COL)
    }
}
