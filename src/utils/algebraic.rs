//! Conversions between algebraic coordinates (`e4`) and board locations.
//!
//! Rows map to ranks (`row 0 == rank 1`) and columns to files
//! (`col 0 == file a`). Coordinate moves are two squares back to back
//! (`e2e4`), which is what the console driver and tests feed the engine.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{is_on_board, BoardLocation};

/// Convert an algebraic square (for example: "e4") to `(row, col)`.
pub fn algebraic_to_location(square: &str) -> Result<BoardLocation, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    Ok(((rank - b'1') as i8, (file - b'a') as i8))
}

/// Convert `(row, col)` to an algebraic square (for example: "e4").
pub fn location_to_algebraic(location: BoardLocation) -> Result<String, ChessErrors> {
    if !is_on_board(location) {
        return Err(ChessErrors::OutOfBounds(location));
    }

    let file_char = char::from(b'a' + location.1 as u8);
    let rank_char = char::from(b'1' + location.0 as u8);
    Ok(format!("{file_char}{rank_char}"))
}

/// Split a coordinate move such as "e2e4" into origin and destination.
pub fn parse_coordinate_move(text: &str) -> Result<(BoardLocation, BoardLocation), ChessErrors> {
    let text = text.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }
    let from = algebraic_to_location(&text[..2])?;
    let to = algebraic_to_location(&text[2..])?;
    Ok((from, to))
}
