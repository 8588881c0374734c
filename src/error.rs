//! Error types for a game session

use crate::core::WordError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a game from starting or continuing
#[derive(Debug, Error)]
pub enum GameError {
    #[error("the word bank contains no 5-letter alphabetic words")]
    EmptyCorpus,

    #[error("failed to read word bank {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid word")]
    InvalidWord(#[from] WordError),

    #[error("the game is already over")]
    GameOver,

    #[error("input closed before the game finished")]
    InputClosed,

    #[error("failed to read player input")]
    Input(#[source] io::Error),

    #[error("failed to write to the terminal")]
    Output(#[source] io::Error),
}
