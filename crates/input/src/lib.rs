//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into game [`Key`]s and tracks which keys are held, so
//! the core can be fed one [`crate::types::KeyStates`] sample per frame
//! (including on terminals without key-release events).

pub mod handler;
pub mod map;

pub use tui_snake_types as types;

pub use handler::HeldKeys;
pub use map::{map_key, should_quit, Key};
