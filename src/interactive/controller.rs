//! Interactive turn loop
//!
//! Drives one player through choosing or loading a game, guessing letters,
//! saving, and deciding whether to play again. Restarting builds a fresh
//! game inside the same loop rather than re-entering it.

use super::input::{self, GuessInput};
use super::prompt::{InputError, Prompter};
use super::prompts;
use crate::core::GameState;
use crate::output::display;
use crate::persistence::{LoadError, SaveStore};
use crate::wordlists::WordSource;
use anyhow::Context;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// How a single game ended before the play-again question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Finished,
    Abandoned,
}

/// The interactive Hangman session
pub struct TurnController<'a, R, W, S: ?Sized> {
    prompter: Prompter<R, W>,
    source: &'a S,
    store: &'a SaveStore,
}

impl<'a, R, W, S> TurnController<'a, R, W, S>
where
    R: BufRead,
    W: Write,
    S: WordSource + ?Sized,
{
    pub const fn new(prompter: Prompter<R, W>, source: &'a S, store: &'a SaveStore) -> Self {
        Self {
            prompter,
            source,
            store,
        }
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Play games until the player declines another one or input ends
    ///
    /// # Errors
    /// Fails on output errors or when a configured retry ceiling is hit.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match self.play_session() {
                Ok(true) => info!("restarting"),
                Ok(false) => {
                    write!(self.prompter.output(), "{}", prompts::FAREWELL)?;
                    return Ok(());
                }
                Err(InputError::Closed) => {
                    info!("input closed, leaving");
                    return Ok(());
                }
                Err(err) => return Err(err).context("interactive session failed"),
            }
        }
    }

    /// One pass from the welcome banner to the play-again answer
    fn play_session(&mut self) -> Result<bool, InputError> {
        display::print_welcome(self.prompter.output(), prompts::BANNER)?;

        if let Some(mut game) = self.setup_game()? {
            write!(self.prompter.output(), "{}", prompts::LETS_PLAY)?;
            display::print_state(self.prompter.output(), &game)?;
            let end = self.play_rounds(&mut game)?;
            info!(?end, "game ended");
        }

        self.prompter.ask(prompts::RESTART, input::parse_yes_no)
    }

    fn setup_game(&mut self) -> Result<Option<GameState>, InputError> {
        if self.prompter.ask(prompts::LOAD_OR_NEW, input::parse_yes_no)? {
            self.load_game()
        } else {
            self.new_game().map(Some)
        }
    }

    fn new_game(&mut self) -> Result<GameState, InputError> {
        loop {
            let length = self
                .prompter
                .ask(prompts::LENGTH, input::parse_length)?
                .resolve(&mut rand::rng());

            match GameState::new_game(self.source, length) {
                Ok(game) => return Ok(game),
                Err(err) => {
                    warn!(%err, "no candidate word");
                    writeln!(
                        self.prompter.output(),
                        "\nNo word with {} letters in the dictionary.\n",
                        err.length
                    )?;
                }
            }
        }
    }

    /// List saves, let the player pick one, and restore it
    ///
    /// Load failures are reported and yield `None`, which sends the player
    /// to the play-again question.
    fn load_game(&mut self) -> Result<Option<GameState>, InputError> {
        let ids = match self.store.list() {
            Ok(ids) if ids.is_empty() => return self.load_failed(&LoadError::NoSaves),
            Ok(ids) => ids,
            Err(err) => return self.load_failed(&err),
        };

        display::print_saves(self.prompter.output(), &ids)?;
        let index = self
            .prompter
            .ask(prompts::PICK_FILE, |text| input::parse_selection(text, ids.len()))?;

        match self.store.load(&ids[index]) {
            Ok(game) => Ok(Some(game)),
            Err(err) => self.load_failed(&err),
        }
    }

    fn load_failed(&mut self, err: &LoadError) -> Result<Option<GameState>, InputError> {
        warn!(%err, "load failed");
        let notice = match err {
            LoadError::NoSaves => prompts::NO_SAVES,
            _ => prompts::LOAD_FAILED,
        };
        write!(self.prompter.output(), "{notice}")?;
        Ok(None)
    }

    /// Guess until the game is over or the player stops after saving
    fn play_rounds(&mut self, game: &mut GameState) -> Result<RoundEnd, InputError> {
        loop {
            if game.is_over() {
                display::print_result(self.prompter.output(), game)?;
                return Ok(RoundEnd::Finished);
            }

            match self.ask_guess(game)? {
                GuessInput::Save => {
                    match self.store.save(game) {
                        Ok(id) => display::print_saved(self.prompter.output(), &id)?,
                        Err(err) => {
                            warn!(%err, "save failed");
                            write!(self.prompter.output(), "{}", prompts::SAVE_FAILED)?;
                        }
                    }
                    if !self.prompter.ask(prompts::CONTINUE, input::parse_yes_no)? {
                        return Ok(RoundEnd::Abandoned);
                    }
                }
                GuessInput::Letter(letter) => {
                    let outcome = game.guess(letter);
                    display::print_outcome(self.prompter.output(), outcome)?;
                }
            }

            display::print_state(self.prompter.output(), game)?;
        }
    }

    /// Ask for a guess, turning away letters that were already tried
    fn ask_guess(&mut self, game: &GameState) -> Result<GuessInput, InputError> {
        loop {
            let guess = self.prompter.ask(prompts::GUESS, input::parse_guess)?;
            if let GuessInput::Letter(letter) = guess
                && game.has_guessed(letter)
            {
                write!(self.prompter.output(), "{}", prompts::TRIED_ALREADY)?;
                continue;
            }
            return Ok(guess);
        }
    }
}
