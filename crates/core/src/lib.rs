//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake rules, the fixed-step simulation and the
//! interpolation that turns it into smooth draw commands. It has **no
//! dependencies** on a terminal, window or graphics API, making it:
//!
//! - **Deterministic**: Same seed and same frame deltas produce identical games
//! - **Testable**: Logic runs on explicit `Duration`s, never on a wall clock
//! - **Portable**: Any host that can sample keys and draw sprites can run it
//!
//! # Module Structure
//!
//! - [`geometry`]: cell <-> normalized continuous coordinates, wall bounds
//! - [`input_buffer`]: edge-triggered keys and the pending direction queue
//! - [`snake`]: the snake body and its grow/shrink step
//! - [`clock`]: tick accumulator, speed ramp, frame deltas
//! - [`session`]: one round of play and its per-tick rules
//! - [`controller`]: Menu / Playing / Settings / Exit state machine
//! - [`render`]: interpolated draw commands
//! - [`rng`]: seeded LCG for food placement
//! - [`config`]: JSON-loadable tunables
//!
//! # Game Rules
//!
//! - **Movement**: one cell per tick in the applied direction
//! - **Turning**: at most one buffered turn per tick; a 180° turn is never applied
//! - **Food**: eating grows the snake by one; new food lands on a free cell
//! - **Walls**: leaving the playable area ends the round
//! - **Self**: running into the body ends the round (configurable)
//! - **Speed**: the tick interval shortens every few cells of growth, down to a floor
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tui_snake_core::types::KeyStates;
//! use tui_snake_core::{GameConfig, GameLoopController, Screen};
//!
//! let mut game = GameLoopController::new(GameConfig::default().with_seed(12345));
//!
//! // "Start" is preselected; confirm starts a round.
//! let confirm = KeyStates { confirm: true, ..KeyStates::default() };
//! game.update(confirm, Duration::ZERO);
//! assert_eq!(game.screen(), Screen::Playing);
//!
//! // One full tick interval moves the snake one cell.
//! game.update(KeyStates::default(), Duration::from_millis(200));
//! assert_eq!(game.session().unwrap().ticks(), 1);
//!
//! let draw_list = game.render();
//! assert!(!draw_list.is_empty());
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep system:
//! - **Tick interval**: 200ms for a fresh snake
//! - **Ramp**: 10ms faster every 5 cells of length
//! - **Floor**: 60ms
//!
//! Call [`GameLoopController::update`] every frame with the elapsed time and
//! [`GameLoopController::render`] to draw.

pub mod clock;
pub mod config;
pub mod controller;
pub mod geometry;
pub mod input_buffer;
pub mod render;
pub mod rng;
pub mod session;
pub mod snake;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use clock::{FrameClock, SimulationClock, SpeedRamp};
pub use config::{GameConfig, SelfCollision};
pub use controller::{Events, GameEvent, GameLoopController, GameState, Screen};
pub use geometry::GridGeometry;
pub use input_buffer::{InputBuffer, KeyEdges};
pub use render::InterpolationRenderer;
pub use rng::SimpleRng;
pub use session::{GameSession, TickOutcome, TickReport};
pub use snake::SnakeBody;
