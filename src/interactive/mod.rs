//! Interactive terminal session
//!
//! Input validation, prompting, and the turn loop that ties the game state
//! to saving and loading.

mod controller;
pub mod input;
mod prompt;
pub mod prompts;

pub use controller::TurnController;
pub use input::{GuessInput, InvalidInputError, LengthChoice};
pub use prompt::{InputError, Prompter};
