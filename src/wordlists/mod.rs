//! Word banks for the game
//!
//! The secret word is drawn from a player-supplied text file.

pub mod loader;

pub use loader::{candidate_words, choose_secret, load_corpus};
