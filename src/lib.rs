//! Termle
//!
//! A daily five-letter word guessing game for the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use termle::core::FeedbackRule;
//! use termle::game::Game;
//! use termle::wordlists::WordBank;
//!
//! let bank = WordBank::embedded().unwrap();
//! let mut game = Game::for_day(0, &bank, FeedbackRule::Containment);
//!
//! let answer = game.answer().clone();
//! let pattern = game.submit(answer.text(), &bank).unwrap();
//! assert!(pattern.is_perfect());
//! assert!(game.is_won());
//! ```

// Core domain types
pub mod core;

// Game state and day selection
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
