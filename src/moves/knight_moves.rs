use crate::game_state::chess_types::BoardLocation;
use crate::moves::line_of_sight::delta;

/// L-shaped jump; knights ignore whatever sits in between.
#[inline]
pub fn is_knight_move_legal(from: BoardLocation, to: BoardLocation) -> bool {
    let (d_row, d_col) = delta(from, to);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}

#[cfg(test)]
mod tests {
    use super::is_knight_move_legal;

    #[test]
    fn knight_from_center_reaches_eight_squares() {
        let d4 = (3, 3);
        let mut count = 0;
        for row in 0..8 {
            for col in 0..8 {
                if is_knight_move_legal(d4, (row, col)) {
                    count += 1;
                }
            }
        }
        assert_eq!(count, 8);
    }

    #[test]
    fn knight_from_corner_reaches_two_squares() {
        assert!(is_knight_move_legal((0, 0), (2, 1)));
        assert!(is_knight_move_legal((0, 0), (1, 2)));
        assert!(!is_knight_move_legal((0, 0), (2, 2)));
        assert!(!is_knight_move_legal((0, 0), (0, 3)));
    }
}
