//! TUI Snake (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_snake::{core,input,term,types}` and
//! hosts the command-line parsing shared by the binary and its tests.

pub mod cli;

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
