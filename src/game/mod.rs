//! Game state, turn evaluation and puzzle selection

pub mod config;
pub mod day;
mod state;

pub use config::{DaySelection, GameConfig};
pub use day::{CalendarError, Date};
pub use state::{Game, GuessError, MAX_TURNS, Summary, Tile};
