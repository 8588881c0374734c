//! Game state and turn handling

mod state;

pub use state::{Game, GameState, MAX_ATTEMPTS, Outcome};
