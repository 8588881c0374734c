//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use crate::game::MAX_ATTEMPTS;
use colored::{Color, Colorize};

/// Terminal colors for each kind of mark
///
/// Every letter is followed by a reset, so text after the guess keeps the
/// terminal's default style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub exact: Color,
    pub present: Color,
    pub absent: Color,
}

impl Default for Palette {
    /// Green for exact, yellow for present, red for absent
    fn default() -> Self {
        Self {
            exact: Color::BrightGreen,
            present: Color::BrightYellow,
            absent: Color::BrightRed,
        }
    }
}

impl Palette {
    #[must_use]
    pub const fn color(&self, mark: Mark) -> Color {
        match mark {
            Mark::Exact => self.exact,
            Mark::Present => self.present,
            Mark::Absent => self.absent,
        }
    }
}

/// Color each letter of a guess by its mark
#[must_use]
pub fn render_feedback(guess: &Word, feedback: &Feedback, palette: &Palette) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.iter())
        .map(|(letter, mark)| letter.to_string().color(palette.color(mark)).to_string())
        .collect()
}

/// Message for a win on the given 1-based attempt
#[must_use]
pub const fn congratulation(attempt: u8) -> Option<&'static str> {
    match attempt {
        1 => Some("Genius!"),
        2 => Some("Magnificent!"),
        3 => Some("Impressive!"),
        4 => Some("Splendid!"),
        5 => Some("Great!"),
        6 => Some("Phew!"),
        _ => None,
    }
}

/// Shareable emoji grid for a finished game
///
/// The header reads `3/6` for a win on attempt 3 and `X/6` for a loss.
#[must_use]
pub fn history_grid(history: &[(Word, Feedback)], won: bool) -> String {
    let score = if won {
        history.len().to_string()
    } else {
        "X".to_string()
    };

    let mut grid = format!("{score}/{MAX_ATTEMPTS}");
    for (_, feedback) in history {
        grid.push('\n');
        grid.push_str(&feedback.to_emoji());
    }
    grid
}
