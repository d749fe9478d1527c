//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] intents and
//! recognizes the quit keys. Gating intents on the game status is left to the
//! controller.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
