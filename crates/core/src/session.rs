//! Game session - everything that lives only while a round is being played
//!
//! A session is built in one piece when a round starts and dropped in one piece
//! when it ends, so there is never a half-reset snake, food or clock.

use std::time::Duration;

use log::{debug, info, trace};

use crate::clock::{SimulationClock, SpeedRamp};
use crate::config::{GameConfig, SelfCollision};
use crate::geometry::GridGeometry;
use crate::input_buffer::InputBuffer;
use crate::rng::SimpleRng;
use crate::snake::SnakeBody;
use crate::types::{Cell, Direction, KeyStates};

/// Result of one logic step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate { at: Cell, length: usize },
    /// Head left the playable area; carries the rejected head cell.
    WallCollision(Cell),
    SelfCollision(Cell),
    /// The snake ate the last food that could ever be placed.
    BoardFilled,
}

impl TickOutcome {
    /// Whether the round is over after this step.
    pub fn ends_round(&self) -> bool {
        matches!(
            self,
            TickOutcome::WallCollision(_) | TickOutcome::SelfCollision(_) | TickOutcome::BoardFilled
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub outcome: TickOutcome,
    /// Set when a queued turn was applied this tick.
    pub turned: Option<Direction>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    geometry: GridGeometry,
    snake: SnakeBody,
    /// Snake as it was before the latest tick, for interpolation.
    previous: SnakeBody,
    food: Option<Cell>,
    direction: Direction,
    input: InputBuffer,
    clock: SimulationClock,
    ramp: SpeedRamp,
    self_collision: SelfCollision,
    rng: SimpleRng,
    ticks: u64,
}

impl GameSession {
    /// Fresh round: one-cell snake at the configured start, food on a free cell.
    pub fn new(config: &GameConfig, seed: u32) -> Self {
        let mut session = Self::with_state(
            config,
            SnakeBody::new(config.start),
            config.start_direction,
            None,
            seed,
        );
        session.food = session.sample_food();
        info!(
            "session start: seed={} head=({}, {}) food={:?}",
            seed, config.start.x, config.start.y, session.food
        );
        session
    }

    /// Session with an explicit snake, heading and food.
    pub fn with_state(
        config: &GameConfig,
        snake: SnakeBody,
        direction: Direction,
        food: Option<Cell>,
        seed: u32,
    ) -> Self {
        let ramp = config.ramp();
        Self {
            geometry: config.geometry(),
            previous: snake.clone(),
            clock: SimulationClock::new(ramp.interval_for(snake.len())),
            snake,
            food,
            direction,
            input: InputBuffer::new(),
            ramp,
            self_collision: config.self_collision,
            rng: SimpleRng::new(seed),
            ticks: 0,
        }
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    pub fn previous(&self) -> &SnakeBody {
        &self.previous
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn tick_interval(&self) -> Duration {
        self.clock.interval()
    }

    pub fn elapsed_fraction(&self) -> f32 {
        self.clock.elapsed_fraction()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Buffer this frame's directional edges against the applied heading.
    pub fn queue_input(&mut self, edges: &KeyStates) -> usize {
        self.input.accept(edges, self.direction)
    }

    /// Add frame time; runs one logic step when the interval has elapsed.
    pub fn advance(&mut self, dt: Duration) -> Option<TickReport> {
        if self.clock.advance(dt) {
            Some(self.step())
        } else {
            None
        }
    }

    /// Run one logic step now, regardless of the clock.
    pub fn step(&mut self) -> TickReport {
        self.ticks += 1;
        self.clock.reset();
        self.previous = self.snake.clone();

        let mut turned = None;
        if let Some(next) = self.input.pop() {
            if !next.is_opposite(self.direction) && next != self.direction {
                self.direction = next;
                turned = Some(next);
            }
        }

        let new_head = self.snake.next_head(self.direction);
        let outcome = self.resolve(new_head);
        trace!(
            "tick {}: head=({}, {}) dir={} -> {:?}",
            self.ticks,
            new_head.x,
            new_head.y,
            self.direction.as_str(),
            outcome
        );
        if outcome.ends_round() {
            info!(
                "round over after {} ticks, length {}: {:?}",
                self.ticks,
                self.snake.len(),
                outcome
            );
        }
        TickReport { outcome, turned }
    }

    fn resolve(&mut self, new_head: Cell) -> TickOutcome {
        // Walls first: a head outside the board can never also be on the food.
        if !self.geometry.in_interior(new_head) {
            return TickOutcome::WallCollision(new_head);
        }

        let eats = self.food == Some(new_head);
        if self.self_collision == SelfCollision::GameOver
            && self.snake.contains_self_collision(new_head, eats)
        {
            return TickOutcome::SelfCollision(new_head);
        }

        self.snake.advance(self.direction, eats);
        self.update_speed();

        if !eats {
            return TickOutcome::Moved;
        }

        let length = self.snake.len();
        debug!(
            "ate food at ({}, {}), length {}",
            new_head.x, new_head.y, length
        );
        self.food = self.sample_food();
        match self.food {
            Some(_) => TickOutcome::Ate {
                at: new_head,
                length,
            },
            None => TickOutcome::BoardFilled,
        }
    }

    fn update_speed(&mut self) {
        let interval = self.ramp.interval_for(self.snake.len());
        if interval != self.clock.interval() {
            debug!(
                "tick interval {}ms -> {}ms",
                self.clock.interval().as_millis(),
                interval.as_millis()
            );
            self.clock.set_interval(interval);
        }
    }

    /// Uniform pick among interior cells the snake does not occupy.
    fn sample_food(&mut self) -> Option<Cell> {
        let free: Vec<Cell> = self
            .geometry
            .interior_cells()
            .filter(|&c| !self.snake.contains(c))
            .collect();
        self.rng.choose(&free)
    }
}
