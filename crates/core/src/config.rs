//! Game configuration - grid, timing and rule tunables, loadable from JSON
//!
//! [`GameConfig::load`] and [`GameConfig::from_json_str`] always validate, so a
//! config that reaches the game has a playable grid and a sane speed ramp.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::clock::SpeedRamp;
use crate::geometry::GridGeometry;
use crate::types::{
    Cell, Direction, BASE_TICK_MS, GRID_HEIGHT, GRID_WIDTH, MAX_GRID_SIDE, MIN_TICK_MS, RAMP_EVERY,
    RAMP_STEP_MS, START_CELL,
};

/// What happens when the head runs into the snake's own body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfCollision {
    /// The round ends, like a wall hit.
    #[default]
    GameOver,
    /// The head passes through the body.
    Allow,
}

impl SelfCollision {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelfCollision::GameOver => "ends round",
            SelfCollision::Allow => "passes through",
        }
    }
}

/// Tunables for one game. Every field has a default, so a config file only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    /// Treat the outermost ring as wall.
    pub border: bool,
    pub start: Cell,
    pub start_direction: Direction,
    pub base_tick_ms: u64,
    pub ramp_step_ms: u64,
    /// Length growth per speed milestone.
    pub ramp_every: usize,
    pub min_tick_ms: u64,
    pub self_collision: SelfCollision,
    /// Fixed RNG seed; `None` lets the host pick one.
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            border: true,
            start: START_CELL,
            start_direction: Direction::Right,
            base_tick_ms: BASE_TICK_MS,
            ramp_step_ms: RAMP_STEP_MS,
            ramp_every: RAMP_EVERY,
            min_tick_ms: MIN_TICK_MS,
            self_collision: SelfCollision::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.grid_width, self.grid_height, self.border)
    }

    pub fn ramp(&self) -> SpeedRamp {
        SpeedRamp {
            base: Duration::from_millis(self.base_tick_ms),
            step: Duration::from_millis(self.ramp_step_ms),
            every: self.ramp_every,
            floor: Duration::from_millis(self.min_tick_ms),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_width < 4 || self.grid_height < 4 {
            bail!(
                "grid must be at least 4x4, got {}x{}",
                self.grid_width,
                self.grid_height
            );
        }
        if self.grid_width > MAX_GRID_SIDE || self.grid_height > MAX_GRID_SIDE {
            bail!(
                "grid sides are capped at {}, got {}x{}",
                MAX_GRID_SIDE,
                self.grid_width,
                self.grid_height
            );
        }
        if !self.geometry().in_interior(self.start) {
            bail!(
                "start cell ({}, {}) is outside the playable area",
                self.start.x,
                self.start.y
            );
        }
        if self.ramp_every == 0 {
            bail!("ramp_every must be at least 1");
        }
        if self.min_tick_ms == 0 {
            bail!("min_tick_ms must be greater than zero");
        }
        if self.min_tick_ms > self.base_tick_ms {
            bail!(
                "min_tick_ms ({}) must not exceed base_tick_ms ({})",
                self.min_tick_ms,
                self.base_tick_ms
            );
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(s).context("invalid config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("in config {}", path.display()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.start, Cell::new(10, 7));
        assert_eq!(config.start_direction, Direction::Right);
        assert_eq!(config.self_collision, SelfCollision::GameOver);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            GameConfig::from_json_str(r#"{ "grid_width": 30, "self_collision": "allow" }"#)
                .unwrap();
        assert_eq!(config.grid_width, 30);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.self_collision, SelfCollision::Allow);
    }

    #[test]
    fn test_direction_and_cell_parse_from_json() {
        let config = GameConfig::from_json_str(
            r#"{ "start": { "x": 3, "y": 4 }, "start_direction": "up", "seed": 9 }"#,
        )
        .unwrap();
        assert_eq!(config.start, Cell::new(3, 4));
        assert_eq!(config.start_direction, Direction::Up);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_zero_floor_is_rejected() {
        let config = GameConfig {
            min_tick_ms: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_floor_above_base_is_rejected() {
        let config = GameConfig {
            min_tick_ms: 300,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_start_on_border_is_rejected() {
        let config = GameConfig {
            start: Cell::new(0, 7),
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("outside"));

        let borderless = GameConfig {
            start: Cell::new(0, 7),
            border: false,
            ..GameConfig::default()
        };
        assert!(borderless.validate().is_ok());
    }

    #[test]
    fn test_tiny_grid_is_rejected() {
        assert!(GameConfig::from_json_str(r#"{ "grid_width": 3 }"#).is_err());
    }

    #[test]
    fn test_oversized_grid_is_rejected() {
        let config = GameConfig {
            grid_width: 40000,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let at_cap = GameConfig {
            grid_width: MAX_GRID_SIDE,
            grid_height: MAX_GRID_SIDE,
            ..GameConfig::default()
        };
        assert!(at_cap.validate().is_ok());
        assert!(GameConfig::from_json_str(r#"{ "grid_height": 256 }"#).is_err());
    }

    #[test]
    fn test_self_collision_names() {
        assert_eq!(SelfCollision::GameOver.as_str(), "ends round");
        assert_eq!(SelfCollision::Allow.as_str(), "passes through");
    }

    #[test]
    fn test_ramp_uses_configured_values() {
        let config = GameConfig {
            base_tick_ms: 100,
            ramp_step_ms: 20,
            ramp_every: 2,
            min_tick_ms: 50,
            ..GameConfig::default()
        };
        let ramp = config.ramp();
        assert_eq!(ramp.interval_for(1), Duration::from_millis(100));
        assert_eq!(ramp.interval_for(3), Duration::from_millis(80));
        assert_eq!(ramp.interval_for(100), Duration::from_millis(50));
    }
}
