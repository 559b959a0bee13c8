//! Hangman
//!
//! A terminal word-guessing game with save and resume.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameState, Letter, WordLength};
//! use hangman::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::new(["apple"]);
//! let mut game = GameState::new_game(&dictionary, WordLength::new(5).unwrap()).unwrap();
//!
//! for ch in ['a', 'p', 'l', 'e'] {
//!     game.guess(Letter::new(ch).unwrap());
//! }
//! assert!(game.is_won());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Saved games
pub mod persistence;

// Runtime configuration
pub mod config;

// Terminal output formatting
pub mod output;

// Interactive prompt/response session
pub mod interactive;
