//! Terminal presentation for the game.
//!
//! Renders into a simple character framebuffer which is then flushed to the
//! terminal, so the game core stays free of I/O and the view stays testable.
//! Cells are drawn 2 characters wide to keep blocks roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
