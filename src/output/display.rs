//! Console screens: the board, the prompt and the final score

use super::formatters::format_row;
use crate::game::Game;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Clear the terminal and home the cursor
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Write the `Wordle <day>` header and all six board rows
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_board<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(out, "Wordle {}", game.day())?;
    for row in game.board() {
        writeln!(out, "{}", format_row(row))?;
    }
    Ok(())
}

/// Redraw the screen for the next guess
///
/// `error` is shown under the board when the last input was refused.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_turn<W: Write>(out: &mut W, game: &Game, error: Option<&str>) -> io::Result<()> {
    clear_screen(out)?;
    print_board(out, game)?;
    if let Some(message) = error {
        writeln!(out, "{message}")?;
    }
    write!(out, ">")?;
    out.flush()
}

/// Print the outcome and the shareable summary
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_score<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    let summary = game.summary();
    if game.is_won() {
        writeln!(out, "you won!")?;
    } else {
        writeln!(out, "you lose!")?;
        if let Some(answer) = &summary.answer {
            writeln!(out, "Answer was {answer}")?;
        }
    }
    write!(out, "{summary}")?;
    out.flush()
}
