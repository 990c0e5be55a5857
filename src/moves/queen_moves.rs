use crate::game_state::chess_types::{Board, BoardLocation};
use crate::moves::bishop_moves::is_bishop_move_legal;
use crate::moves::rook_moves::is_rook_move_legal;

#[inline]
pub fn is_queen_move_legal(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    is_rook_move_legal(board, from, to) || is_bishop_move_legal(board, from, to)
}
