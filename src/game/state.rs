//! Turn loop state machine
//!
//! ```text
//! InProgress(6) -> InProgress(5) -> ... -> InProgress(1) -> Lost
//!       \              \                        \
//!        +-> Won(1)     +-> Won(2)      ...      +-> Won(6)
//! ```

use crate::core::{Feedback, Word};
use crate::error::GameError;

/// Number of guesses a player gets
pub const MAX_ATTEMPTS: u8 = 6;

/// Where a game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress { attempts_left: u8 },
    /// Solved on the given 1-based attempt
    Won { attempt: u8 },
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }
}

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub won: bool,
    pub attempts: u8,
}

/// A single game: one secret, up to six guesses
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    state: GameState,
    history: Vec<(Word, Feedback)>,
}

impl Game {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            state: GameState::InProgress {
                attempts_left: MAX_ATTEMPTS,
            },
            history: Vec::with_capacity(usize::from(MAX_ATTEMPTS)),
        }
    }

    /// The secret word
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Guesses played so far with their feedback
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// 1-based number of the attempt about to be played
    ///
    /// Returns `None` once the game is over.
    #[must_use]
    pub const fn attempt_number(&self) -> Option<u8> {
        match self.state {
            GameState::InProgress { attempts_left } => Some(MAX_ATTEMPTS + 1 - attempts_left),
            GameState::Won { .. } | GameState::Lost => None,
        }
    }

    /// Play one guess and advance the state machine
    ///
    /// # Errors
    ///
    /// Returns `GameError::GameOver` if the game has already been won or lost.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{Game, GameState};
    ///
    /// let mut game = Game::new(Word::new("crane").unwrap());
    /// game.submit(Word::new("slate").unwrap()).unwrap();
    /// assert_eq!(game.state(), GameState::InProgress { attempts_left: 5 });
    ///
    /// let feedback = game.submit(Word::new("crane").unwrap()).unwrap();
    /// assert!(feedback.is_solved());
    /// assert_eq!(game.state(), GameState::Won { attempt: 2 });
    /// ```
    pub fn submit(&mut self, guess: Word) -> Result<Feedback, GameError> {
        let GameState::InProgress { attempts_left } = self.state else {
            return Err(GameError::GameOver);
        };

        let attempt = MAX_ATTEMPTS + 1 - attempts_left;
        let feedback = Feedback::calculate(&guess, &self.secret);
        log::trace!("attempt {attempt}: {guess} -> {}", feedback.to_emoji());
        self.history.push((guess, feedback));

        self.state = if feedback.is_solved() {
            GameState::Won { attempt }
        } else if attempts_left - 1 == 0 {
            GameState::Lost
        } else {
            GameState::InProgress {
                attempts_left: attempts_left - 1,
            }
        };

        Ok(feedback)
    }

    /// Result of the game, once it has ended
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::InProgress { .. } => None,
            GameState::Won { attempt } => Some(Outcome {
                won: true,
                attempts: attempt,
            }),
            GameState::Lost => Some(Outcome {
                won: false,
                attempts: MAX_ATTEMPTS,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn new_game_starts_with_six_attempts() {
        let game = Game::new(word("crane"));
        assert_eq!(game.state(), GameState::InProgress { attempts_left: 6 });
        assert_eq!(game.attempt_number(), Some(1));
        assert!(game.outcome().is_none());
        assert!(game.history().is_empty());
    }

    #[test]
    fn win_on_first_attempt() {
        let mut game = Game::new(word("crane"));
        assert!(game.submit(word("crane")).unwrap().is_solved());
        assert_eq!(game.state(), GameState::Won { attempt: 1 });
        assert_eq!(
            game.outcome(),
            Some(Outcome {
                won: true,
                attempts: 1
            })
        );
    }

    #[test]
    fn win_on_third_attempt() {
        let mut game = Game::new(word("crane"));
        game.submit(word("slate")).unwrap();
        game.submit(word("audio")).unwrap();
        assert_eq!(game.attempt_number(), Some(3));
        game.submit(word("crane")).unwrap();

        assert_eq!(game.state(), GameState::Won { attempt: 3 });
        assert_eq!(game.attempt_number(), None);
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn win_on_last_attempt() {
        let mut game = Game::new(word("crane"));
        for _ in 0..5 {
            game.submit(word("slate")).unwrap();
        }
        game.submit(word("crane")).unwrap();
        assert_eq!(game.state(), GameState::Won { attempt: 6 });
    }

    #[test]
    fn six_misses_lose() {
        let mut game = Game::new(word("crane"));
        for expected_left in (1..=5).rev() {
            game.submit(word("slate")).unwrap();
            assert_eq!(
                game.state(),
                GameState::InProgress {
                    attempts_left: expected_left
                }
            );
        }
        game.submit(word("slate")).unwrap();

        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(
            game.outcome(),
            Some(Outcome {
                won: false,
                attempts: 6
            })
        );
        assert_eq!(game.secret().text(), "CRANE");
    }

    #[test]
    fn no_guesses_after_terminal_state() {
        let mut game = Game::new(word("crane"));
        game.submit(word("crane")).unwrap();
        assert!(matches!(
            game.submit(word("slate")),
            Err(GameError::GameOver)
        ));
        assert_eq!(game.history().len(), 1);

        let mut lost = Game::new(word("crane"));
        for _ in 0..6 {
            lost.submit(word("slate")).unwrap();
        }
        assert!(matches!(
            lost.submit(word("crane")),
            Err(GameError::GameOver)
        ));
    }
}
