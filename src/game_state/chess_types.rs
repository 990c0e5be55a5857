//! Core value types shared by every layer of the rules engine.
//!
//! Colors, piece kinds, the `Piece` record stored in board cells, and the
//! `(row, col)` coordinate pair used across the public API.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::move_record::MoveRecord;

/// Board coordinate as `(row, col)`. Row 0 is the light back rank, column 0
/// is the a-file. Signed so callers can ask about off-board squares.
pub type BoardLocation = (i8, i8);

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// White.
    Light,
    /// Black.
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Row a pawn may double-step from.
    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }

    /// Row on which a pawn promotes.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    /// Row holding this side's king and rooks at the start of a game.
    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "white"),
            Color::Dark => write!(f, "black"),
        }
    }
}

/// Piece kind (color is carried separately on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Upper-case algebraic letter (`P` for pawns).
    #[inline]
    pub const fn notation(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// A piece as stored in a board cell.
///
/// `row`/`col` always mirror the cell holding the piece; `Board::set` keeps
/// them in sync, so code that moves pieces should go through the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub row: i8,
    pub col: i8,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, row: i8, col: i8) -> Self {
        Self {
            kind,
            color,
            row,
            col,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn location(&self) -> BoardLocation {
        (self.row, self.col)
    }

    /// Unicode figurine for front-ends.
    pub const fn symbol(&self) -> char {
        match (self.color, self.kind) {
            (Color::Light, PieceKind::Pawn) => '♙',
            (Color::Light, PieceKind::Knight) => '♘',
            (Color::Light, PieceKind::Bishop) => '♗',
            (Color::Light, PieceKind::Rook) => '♖',
            (Color::Light, PieceKind::Queen) => '♕',
            (Color::Light, PieceKind::King) => '♔',
            (Color::Dark, PieceKind::Pawn) => '♟',
            (Color::Dark, PieceKind::Knight) => '♞',
            (Color::Dark, PieceKind::Bishop) => '♝',
            (Color::Dark, PieceKind::Rook) => '♜',
            (Color::Dark, PieceKind::Queen) => '♛',
            (Color::Dark, PieceKind::King) => '♚',
        }
    }

    /// Algebraic letter, upper-case for light and lower-case for dark.
    pub fn notation(&self) -> char {
        match self.color {
            Color::Light => self.kind.notation(),
            Color::Dark => self.kind.notation().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at ({},{})", self.color, self.kind, self.row, self.col)
    }
}

/// A from/to pair, as produced by legal move enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: BoardLocation,
    pub to: BoardLocation,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: BoardLocation, to: BoardLocation) -> Self {
        Self { from, to }
    }
}

/// True when both coordinates fall inside `0..=7`.
#[inline]
pub const fn is_on_board(location: BoardLocation) -> bool {
    location.0 >= 0 && location.0 < 8 && location.1 >= 0 && location.1 < 8
}
