//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders the core's draw commands into a simple framebuffer that can be
//! flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Only ever consume `DrawCommand`s, never game state
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{head_glyph, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
