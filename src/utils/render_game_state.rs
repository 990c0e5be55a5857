//! Debug board dump.
//!
//! Ranks run 8 down to 1 with labels on both sides, files a–h above and
//! below. ASCII uses piece letters (upper-case light, lower-case dark) and
//! `.` for empty squares; Unicode uses figurines and `·`.

use crate::game_state::chess_types::GameState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStyle {
    #[default]
    Ascii,
    Unicode,
}

impl RenderStyle {
    /// `unicode` (any case) selects figurines; anything else falls back to ASCII.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("unicode") {
            RenderStyle::Unicode
        } else {
            RenderStyle::Ascii
        }
    }
}

pub fn render_game_state(game_state: &GameState, style: RenderStyle) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..8i8).rev() {
        let rank_label = char::from(b'1' + row as u8);
        out.push(rank_label);
        out.push(' ');

        for col in 0..8i8 {
            let cell = match (game_state.get_piece(row, col), style) {
                (Some(piece), RenderStyle::Ascii) => piece.notation(),
                (Some(piece), RenderStyle::Unicode) => piece.symbol(),
                (None, RenderStyle::Ascii) => '.',
                (None, RenderStyle::Unicode) => '·',
            };
            out.push(cell);
            out.push(' ');
        }

        out.push(rank_label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
