//! Command implementations

pub mod play;

pub use play::{Prompter, run_game, run_play};
