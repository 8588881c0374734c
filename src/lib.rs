//! Wordle
//!
//! A command-line Wordle game: a secret word is drawn from a word bank file and
//! the player has six guesses to find it, with colored per-letter feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, Mark, Word};
//! use wordle_game::game::{Game, GameState};
//!
//! let mut game = Game::new(Word::new("alloy").unwrap());
//! let feedback = game.submit(Word::new("lolly").unwrap()).unwrap();
//!
//! assert_eq!(feedback.count(Mark::Exact), 2);
//! assert_eq!(game.state(), GameState::InProgress { attempts_left: 5 });
//! ```

// Core domain types
pub mod core;

// Turn loop
pub mod game;

// Word banks and secret selection
pub mod wordlists;

// Interactive session
pub mod commands;

// Terminal output formatting
pub mod output;

mod error;

pub use error::GameError;
