//! Core domain types
//!
//! Words and per-letter feedback. Pure types with no I/O.

mod pattern;
mod word;

pub use pattern::{Feedback, FeedbackRule, Pattern};
pub use word::{WORD_LEN, Word, WordError};
