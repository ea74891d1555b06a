//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no required dependencies, making them
//! usable in any context (simulation core, terminal rendering, tests).
//!
//! # Grid
//!
//! The default playfield matches the classic layout:
//!
//! - **Width**: 20 columns (indexed 0-19)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Border**: the outermost ring is wall, so the snake lives in `1..19`
//! - **Start**: a single cell at (10, 7) heading right
//!
//! Cell coordinates grow to the right (x) and upward (y).
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Host loop frame budget (~60 FPS) |
//! | `BASE_TICK_MS` | 200 | Logic tick interval for a fresh snake |
//! | `RAMP_STEP_MS` | 10 | Interval reduction per speed milestone |
//! | `RAMP_EVERY` | 5 | Length growth per speed milestone |
//! | `MIN_TICK_MS` | 60 | Fastest allowed tick interval |
//! | `KEY_RELEASE_TIMEOUT_MS` | 150 | Auto-release for terminals without release events |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction, GRID_HEIGHT, GRID_WIDTH};
//!
//! let head = Cell::new(10, 7);
//! assert_eq!(head + Direction::Right, Cell::new(11, 7));
//! assert_eq!(head + Direction::Up, Cell::new(10, 8));
//!
//! assert!(Direction::Left.is_opposite(Direction::Right));
//! assert_eq!(Direction::from_str("down"), Some(Direction::Down));
//!
//! assert_eq!(GRID_WIDTH, 20);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

use std::ops::Add;

/// Grid width in cells (20 columns)
pub const GRID_WIDTH: i32 = 20;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: i32 = 20;

/// Largest accepted grid side, in cells
pub const MAX_GRID_SIDE: i32 = 255;

/// Spawn cell of a fresh snake
pub const START_CELL: Cell = Cell { x: 10, y: 7 };

/// Host loop frame budget in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Logic tick interval for a fresh snake (200ms)
pub const BASE_TICK_MS: u64 = 200;

/// Tick interval reduction per speed milestone (10ms)
pub const RAMP_STEP_MS: u64 = 10;

/// Snake growth (in cells) between speed milestones
pub const RAMP_EVERY: usize = 5;

/// Tick interval floor (60ms)
pub const MIN_TICK_MS: u64 = 60;

/// Maximum number of buffered direction changes between ticks
pub const DIRECTION_QUEUE_CAPACITY: usize = 4;

/// Held keys are released after this long without a press or repeat event
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;


/// A cell on the grid (integer coordinates, y grows upward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add<Direction> for Cell {
    type Output = Cell;

    fn add(self, dir: Direction) -> Cell {
        let (dx, dy) = dir.delta();
        Cell::new(self.x + dx, self.y + dy)
    }
}

/// One of the four headings a snake can take
///
/// The rotation cycle goes: Up → Right → Down → Left → Up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in input-scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit delta `(dx, dy)` for one step in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from `self` to `other` would be a 180° turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Head sprite rotation in radians (sprite art points up).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.angle(), 0.0);
    /// assert_eq!(Direction::Down.angle(), std::f32::consts::PI);
    /// ```
    pub fn angle(&self) -> f32 {
        use std::f32::consts::{FRAC_PI_2, PI};
        match self {
            Direction::Up => 0.0,
            Direction::Right => FRAC_PI_2,
            Direction::Left => -FRAC_PI_2,
            Direction::Down => PI,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Raw held/not-held state of every key the game reads, sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyStates {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub confirm: bool,
    pub back: bool,
    pub escape: bool,
}

impl KeyStates {
    /// Held state of the key bound to `dir`.
    pub fn direction(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right || self.confirm || self.back || self.escape
    }
}

/// Main menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Start,
    Settings,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Start, MenuItem::Settings, MenuItem::Exit];

    pub fn index(&self) -> usize {
        match self {
            MenuItem::Start => 0,
            MenuItem::Settings => 1,
            MenuItem::Exit => 2,
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Start => "START",
            MenuItem::Settings => "SETTINGS",
            MenuItem::Exit => "EXIT",
        }
    }
}

/// What a draw command asks the renderer to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Head,
    Body,
    Food,
    Border,
    MenuItem(MenuItem),
    SettingsPanel,
}

/// One "draw this sprite here" instruction
///
/// `position` is in normalized continuous space: both axes span `[-1, 1]`
/// with the origin at the grid centre and y pointing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub sprite: SpriteKind,
    pub position: (f32, f32),
    /// Rotation in radians, see [`Direction::angle`].
    pub rotation: f32,
    pub selected: bool,
}

impl DrawCommand {
    pub fn new(sprite: SpriteKind, position: (f32, f32)) -> Self {
        Self {
            sprite,
            position,
            rotation: 0.0,
            selected: false,
        }
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}
