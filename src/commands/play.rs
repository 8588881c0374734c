//! Interactive play mode
//!
//! Text-based game over any reader/writer pair, so a whole session can be
//! driven from a script as easily as from a terminal.

use crate::core::Word;
use crate::error::GameError;
use crate::game::Game;
use crate::output::{Palette, print_attempt_header, print_feedback, print_outcome};
use crate::wordlists::{choose_secret, load_corpus};
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const FILENAME_PROMPT: &str = "Please enter the filename: ";
const GUESS_PROMPT: &str = "Please enter your 5 letter guess: ";

/// Reads player input, prompting on the paired writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The writer prompts and game output go to
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prompt for the word bank file name
    ///
    /// # Errors
    ///
    /// Returns `GameError::InputClosed` at end of input.
    pub fn read_filename(&mut self) -> Result<PathBuf, GameError> {
        self.read_line(FILENAME_PROMPT).map(PathBuf::from)
    }

    /// Prompt until the player enters a valid 5-letter word
    ///
    /// Any letter case is accepted; the guess comes back uppercase.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InputClosed` at end of input.
    pub fn read_guess(&mut self) -> Result<Word, GameError> {
        loop {
            let line = self.read_line(GUESS_PROMPT)?;
            match Word::new(&line) {
                Ok(guess) => return Ok(guess),
                Err(err) => log::debug!("rejected guess {line:?}: {err}"),
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, GameError> {
        write!(self.output, "{prompt}").map_err(GameError::Output)?;
        self.output.flush().map_err(GameError::Output)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(GameError::Input)?;
        if read == 0 {
            return Err(GameError::InputClosed);
        }

        Ok(line.trim().to_string())
    }
}

/// Play one game against `secret` and return it once it has ended
///
/// # Errors
///
/// Returns an error if input closes mid-game or output cannot be written.
pub fn run_game<R: BufRead, W: Write>(
    secret: Word,
    prompter: &mut Prompter<R, W>,
    palette: &Palette,
) -> Result<Game, GameError> {
    let mut game = Game::new(secret);

    while let Some(attempt) = game.attempt_number() {
        print_attempt_header(prompter.output(), attempt).map_err(GameError::Output)?;
        let guess = prompter.read_guess()?;
        let feedback = game.submit(guess.clone())?;
        print_feedback(prompter.output(), &guess, &feedback, palette).map_err(GameError::Output)?;
    }

    print_outcome(prompter.output(), &game).map_err(GameError::Output)?;

    if let Some(outcome) = game.outcome() {
        log::info!(
            "game over: {} after {} attempt(s)",
            if outcome.won { "won" } else { "lost" },
            outcome.attempts
        );
    }

    Ok(game)
}

/// Run a full session: locate the word bank, draw a secret, play it out
///
/// When `wordbank` is `None` the player is asked for the file name.
///
/// # Errors
///
/// Returns an error if the word bank cannot be read, holds no usable word,
/// or input closes before the game ends.
pub fn run_play<R, W, G>(
    prompter: &mut Prompter<R, W>,
    wordbank: Option<PathBuf>,
    rng: &mut G,
    palette: &Palette,
) -> Result<Game, GameError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let path = match wordbank {
        Some(path) => path,
        None => prompter.read_filename()?,
    };

    let corpus = load_corpus(&path)?;
    let secret = choose_secret(&corpus, rng)?;

    run_game(secret, prompter, palette)
}
