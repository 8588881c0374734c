//! Terminal output formatting
//!
//! Rendering of feedback and end-of-game messages. Colors come from a
//! [`Palette`] passed in by the caller.

pub mod display;
pub mod formatters;

pub use display::{print_attempt_header, print_feedback, print_outcome};
pub use formatters::{Palette, congratulation, history_grid, render_feedback};
