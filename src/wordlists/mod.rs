//! Bundled word lists
//!
//! Answers (one per day, in order) and the set of accepted guesses, compiled
//! into the binary from `data/`.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{WordBank, WordBankError};
pub use embedded::{ANSWERS, ANSWERS_COUNT, GUESSES, GUESSES_COUNT};
