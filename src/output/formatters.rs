//! Tile formatting for terminal output

use crate::core::{Feedback, WORD_LEN};
use crate::game::Tile;
use colored::{ColoredString, Colorize};

/// Placeholder letter for an unplayed tile
pub const EMPTY_TILE: char = '_';

/// Color a single letter by its feedback
///
/// Empty tiles (no feedback) share the absent style.
#[must_use]
pub fn colored_letter(letter: char, feedback: Option<Feedback>) -> ColoredString {
    let text = letter.to_ascii_uppercase().to_string();
    match feedback {
        Some(Feedback::Correct) => text.white().on_bright_green(),
        Some(Feedback::Present) => text.white().on_bright_yellow(),
        Some(Feedback::Absent) | None => text.white().on_bright_black(),
    }
}

/// Format one board tile
#[must_use]
pub fn format_tile(tile: Tile) -> ColoredString {
    match tile {
        Tile::Empty => colored_letter(EMPTY_TILE, None),
        Tile::Filled { letter, feedback } => colored_letter(char::from(letter), Some(feedback)),
    }
}

/// Format a board row, each tile preceded by a space
#[must_use]
pub fn format_row(row: &[Tile; WORD_LEN]) -> String {
    row.iter().map(|&tile| format!(" {}", format_tile(tile))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::strip_ansi;

    #[test]
    fn row_text() {
        let row = [
            Tile::Filled {
                letter: b'c',
                feedback: Feedback::Correct,
            },
            Tile::Filled {
                letter: b'r',
                feedback: Feedback::Present,
            },
            Tile::Empty,
            Tile::Empty,
            Tile::Empty,
        ];
        assert_eq!(strip_ansi(&format_row(&row)), " C R _ _ _");
    }

    #[test]
    fn tiles_carry_ansi_backgrounds() {
        colored::control::set_override(true);
        let green = colored_letter('a', Some(Feedback::Correct)).to_string();
        let yellow = colored_letter('a', Some(Feedback::Present)).to_string();
        let gray = colored_letter('a', Some(Feedback::Absent)).to_string();

        // bright backgrounds: 102 green, 103 yellow, 100 black
        assert!(green.contains("102"), "{green:?}");
        assert!(yellow.contains("103"), "{yellow:?}");
        assert!(gray.contains("100"), "{gray:?}");
        assert!(green.contains('A'));
    }
}
