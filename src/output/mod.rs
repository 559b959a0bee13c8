//! Terminal output formatting
//!
//! Plain-text formatters and the colored display helpers built on them.

pub mod display;
pub mod formatters;

pub use display::{print_outcome, print_result, print_saved, print_saves, print_state, print_welcome};
