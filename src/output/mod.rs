//! Terminal output formatting
//!
//! ANSI-colored board tiles and the console screens built from them.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_score, print_turn};

/// Drop ANSI escape sequences so rendered text can be compared
#[cfg(test)]
pub(crate) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // CSI: ESC [ params final-byte
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
