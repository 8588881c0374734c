//! Core domain types for Wordle
//!
//! This module contains the words and the guess evaluator. Everything here is
//! pure: no I/O, no randomness.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark, evaluate};
pub use word::{WORD_LENGTH, Word, WordError};
