//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under `blockfall::{core,input,term,types}` and
//! hosts the pieces that tie them together into a playable program:
//! configuration, logging setup and the frame driver.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod app;
pub mod config;
pub mod logging;

pub use app::{App, ScoreObserver};
pub use config::Config;
