//! Display functions for a game session

use super::formatters::{Palette, congratulation, history_grid, render_feedback};
use crate::core::{Feedback, Word};
use crate::game::Game;
use std::io::{self, Write};

/// Print the header shown before each guess prompt
pub fn print_attempt_header<W: Write>(out: &mut W, attempt: u8) -> io::Result<()> {
    writeln!(out, "Attempt {attempt}")
}

/// Print a guess colored by its feedback
pub fn print_feedback<W: Write>(
    out: &mut W,
    guess: &Word,
    feedback: &Feedback,
    palette: &Palette,
) -> io::Result<()> {
    writeln!(out, "{}", render_feedback(guess, feedback, palette))
}

/// Print the end-of-game message and the result grid
///
/// Does nothing while the game is still in progress.
pub fn print_outcome<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    let Some(outcome) = game.outcome() else {
        return Ok(());
    };

    if outcome.won {
        if let Some(message) = congratulation(outcome.attempts) {
            writeln!(out, "{message}")?;
        }
    } else {
        writeln!(out, "The correct answer is {}", game.secret())?;
    }

    writeln!(out)?;
    writeln!(out, "{}", history_grid(game.history(), outcome.won))
}
