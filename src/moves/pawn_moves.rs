//! Pawn movement and attack rules.
//!
//! Pawn moves and pawn attacks differ: a pawn moves straight ahead onto
//! empty squares but attacks diagonally whether or not the target square is
//! occupied. The en-passant capture lands on the skipped square and removes
//! the pawn standing beside the capturer.

use crate::game_state::chess_types::{Board, BoardLocation, Color, Piece, PieceKind};
use crate::moves::line_of_sight::delta;

/// Movement legality for `pawn` standing on `from`, ignoring check.
pub fn is_pawn_move_legal(
    board: &Board,
    pawn: &Piece,
    from: BoardLocation,
    to: BoardLocation,
    en_passant_square: Option<BoardLocation>,
) -> bool {
    let color = pawn.color;
    let direction = color.pawn_direction();
    let (d_row, d_col) = delta(from, to);
    let target = board.get(to);

    match d_col.abs() {
        0 if d_row == direction => target.is_none(),
        0 if d_row == 2 * direction && from.0 == color.pawn_start_row() => {
            board.is_empty((from.0 + direction, from.1)) && target.is_none()
        }
        1 if d_row == direction => match target {
            Some(occupant) => occupant.color != color,
            None => is_en_passant_capture(board, color, to, en_passant_square),
        },
        _ => false,
    }
}

/// True when a `color` pawn on `from` attacks `target`.
#[inline]
pub fn pawn_attacks_square(color: Color, from: BoardLocation, target: BoardLocation) -> bool {
    let (d_row, d_col) = delta(from, target);
    d_row == color.pawn_direction() && d_col.abs() == 1
}

/// Square of the pawn removed when a `color` pawn captures en passant onto `to`.
#[inline]
pub fn en_passant_victim_location(color: Color, to: BoardLocation) -> BoardLocation {
    (to.0 - color.pawn_direction(), to.1)
}

/// A diagonal step by a `color` pawn onto `to` is an en-passant capture when
/// `to` is the current target and an enemy pawn sits behind it.
pub fn is_en_passant_capture(
    board: &Board,
    color: Color,
    to: BoardLocation,
    en_passant_square: Option<BoardLocation>,
) -> bool {
    if en_passant_square != Some(to) || !board.is_empty(to) {
        return false;
    }
    board
        .get(en_passant_victim_location(color, to))
        .is_some_and(|victim| victim.kind == PieceKind::Pawn && victim.color != color)
}

#[inline]
pub fn is_double_step(from: BoardLocation, to: BoardLocation) -> bool {
    from.1 == to.1 && (to.0 - from.0).abs() == 2
}
