//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules and has no dependencies on rendering, terminal
//! I/O, or timing sources: callers feed it discrete actions and elapsed time.
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid of locked cells, row clearing
//! - [`pieces`]: shape templates, clockwise rotation, the falling [`Piece`]
//! - [`placement`]: the single collision predicate used by every move
//! - [`scoring`]: line-clear engine and the flat score table
//! - [`clock`]: drop clock turning frame time into gravity steps
//! - [`game_state`]: the game controller state machine
//! - [`rng`]: seeded uniform piece selection
//! - [`snapshot`]: read-only view for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{GameAction, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::SoftDrop);
//!
//! assert_eq!(game.status(), GameStatus::Running);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::advance`](game_state::GameState::advance) every frame with
//! the elapsed milliseconds; a gravity step runs each time the accumulated
//! time exceeds the drop interval (1000ms by default).

pub mod board;
pub mod clock;
pub mod game_state;
pub mod pieces;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use clock::DropClock;
pub use game_state::GameState;
pub use pieces::{Piece, Shape};
pub use placement::is_valid_placement;
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{clear_lines, line_clear_score, ClearResult};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
