//! Renderer-side state
//!
//! Tracks the provider's change feed for the terminal front end.

mod board;

pub use board::*;
