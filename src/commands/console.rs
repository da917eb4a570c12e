//! Line-based console session
//!
//! Reads one guess per line and redraws the board after each.

use crate::game::Game;
use crate::output::{print_score, print_turn};
use crate::wordlists::WordBank;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Play `game` to completion over a line-oriented reader and writer
///
/// Stops when the game is complete or input reaches end-of-file, then prints
/// the score. Running out of input before the end counts as a loss.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_console<R: BufRead, W: Write>(
    game: &mut Game,
    bank: &WordBank,
    mut input: R,
    output: &mut W,
) -> Result<()> {
    print_turn(output, game, None).context("failed to draw board")?;

    let mut buf = Vec::new();
    while !game.is_complete() {
        buf.clear();
        if input.read_until(b'\n', &mut buf).context("failed to read guess")? == 0 {
            info!(turn = game.current_turn(), "input closed before the game ended");
            break;
        }
        // Undecodable bytes become U+FFFD and are refused as malformed
        let line = String::from_utf8_lossy(&buf);

        let error = match game.submit(&line, bank) {
            Ok(_) => None,
            Err(e) => {
                debug!(input = %line.trim(), error = %e, "guess refused");
                Some(e.to_string())
            }
        };
        print_turn(output, game, error.as_deref()).context("failed to draw board")?;
    }

    writeln!(output)?;
    print_score(output, game).context("failed to print score")
}
