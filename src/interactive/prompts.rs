//! Prompt and notice texts

pub const BANNER: &str = "\n- - -   H A N G M A N   - - -\n\n";

pub const LOAD_OR_NEW: &str = "choose if you want to load a saved game
y = yes
n = no
> decide: ";

pub const LENGTH: &str = "Please choose length of the word to guess.
  It can be between 5 and 12, or type 'R' for a random length.
> length: ";

pub const PICK_FILE: &str = "choose file to load
> file-nr: ";

pub const GUESS: &str = "guess (or type 'save' to save the game)!
> a-z: ";

pub const CONTINUE: &str = "choose if you want to continue
y = yes
n = no
> decide: ";

pub const RESTART: &str = "choose if you want to play again
y = yes
n = no
> decide: ";

/// Printed before each prompt
pub const PROMPT_MARKER: &str = "> ";

/// Printed after a rejected answer, before the prompt is repeated
pub const INVALID: &str = "\n> INVALID: ";

pub const TRIED_ALREADY: &str = "You tried this already, go for something else!\n";

pub const LETS_PLAY: &str = "\nAlright, let's play!\n\n";

pub const LOAD_FAILED: &str = "\nLoading files: failed.\n\n";

pub const NO_SAVES: &str = "\nNo saved games found.\n\n";

pub const SAVE_FAILED: &str = "\nSaving failed.\n\n";

pub const FAREWELL: &str = "\nBye!\n";
