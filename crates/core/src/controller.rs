//! Game loop controller - the Menu / Playing / Settings / Exit state machine
//!
//! The host calls [`GameLoopController::update`] once per frame with the raw key
//! states and the frame delta, then [`GameLoopController::render`] to get the
//! draw list. Neither reads a clock, so both are deterministic under test.

use std::time::Duration;

use arrayvec::ArrayVec;
use log::info;

use crate::config::GameConfig;
use crate::input_buffer::KeyEdges;
use crate::render::InterpolationRenderer;
use crate::rng::SimpleRng;
use crate::session::{GameSession, TickOutcome};
use crate::types::{Cell, Direction, DrawCommand, KeyStates, MenuItem};

/// Seed used when the config does not pin one.
const DEFAULT_SEED: u32 = 1;

/// Which screen is active, without the data it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Menu,
    Playing,
    Settings,
    Exit,
}

#[derive(Debug, Clone)]
pub enum GameState {
    Menu { selected: MenuItem },
    Playing(Box<GameSession>),
    Settings,
    Exit,
}

impl GameState {
    pub fn screen(&self) -> Screen {
        match self {
            GameState::Menu { .. } => Screen::Menu,
            GameState::Playing(_) => Screen::Playing,
            GameState::Settings => Screen::Settings,
            GameState::Exit => Screen::Exit,
        }
    }
}

/// Things that happened during one `update`, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Ticked,
    DirectionChanged(Direction),
    AteFood { at: Cell, length: usize },
    WallCollision(Cell),
    SelfCollision(Cell),
    BoardFilled,
    StateChanged(Screen),
    ExitRequested,
}

pub type Events = ArrayVec<GameEvent, 8>;

#[derive(Debug, Clone)]
pub struct GameLoopController {
    config: GameConfig,
    state: GameState,
    edges: KeyEdges,
    /// Seeds one session per round.
    seeds: SimpleRng,
    rounds: u32,
    last_length: Option<usize>,
}

impl GameLoopController {
    pub fn new(config: GameConfig) -> Self {
        let seeds = SimpleRng::new(config.seed.unwrap_or(DEFAULT_SEED));
        Self {
            config,
            state: GameState::Menu {
                selected: MenuItem::Start,
            },
            edges: KeyEdges::new(),
            seeds,
            rounds: 0,
            last_length: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    pub fn session(&self) -> Option<&GameSession> {
        match &self.state {
            GameState::Playing(session) => Some(session),
            _ => None,
        }
    }

    pub fn selected(&self) -> Option<MenuItem> {
        match self.state {
            GameState::Menu { selected } => Some(selected),
            _ => None,
        }
    }

    pub fn should_exit(&self) -> bool {
        matches!(self.state, GameState::Exit)
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Snake length when the previous round ended.
    pub fn last_length(&self) -> Option<usize> {
        self.last_length
    }

    /// Replace whatever is running with a fresh round.
    pub fn start_game(&mut self) -> Events {
        let mut events = Events::new();
        self.enter_playing(&mut events);
        events
    }

    /// Advance one frame: read key edges, move the active screen forward.
    pub fn update(&mut self, keys: KeyStates, dt: Duration) -> Events {
        let edges = self.edges.update(keys);
        let mut events = Events::new();

        let next = match &mut self.state {
            GameState::Menu { selected } => {
                if edges.up {
                    *selected = selected.prev();
                }
                if edges.down {
                    *selected = selected.next();
                }
                if edges.confirm {
                    Some(match *selected {
                        MenuItem::Start => Screen::Playing,
                        MenuItem::Settings => Screen::Settings,
                        MenuItem::Exit => Screen::Exit,
                    })
                } else if edges.escape {
                    Some(Screen::Exit)
                } else {
                    None
                }
            }
            GameState::Playing(session) => {
                if edges.escape {
                    self.last_length = Some(session.snake().len());
                    Some(Screen::Menu)
                } else {
                    session.queue_input(&edges);
                    match session.advance(dt) {
                        Some(report) => {
                            let _ = events.try_push(GameEvent::Ticked);
                            if let Some(dir) = report.turned {
                                let _ = events.try_push(GameEvent::DirectionChanged(dir));
                            }
                            let outcome = match report.outcome {
                                TickOutcome::Moved => None,
                                TickOutcome::Ate { at, length } => {
                                    Some(GameEvent::AteFood { at, length })
                                }
                                TickOutcome::WallCollision(at) => {
                                    Some(GameEvent::WallCollision(at))
                                }
                                TickOutcome::SelfCollision(at) => {
                                    Some(GameEvent::SelfCollision(at))
                                }
                                TickOutcome::BoardFilled => Some(GameEvent::BoardFilled),
                            };
                            if let Some(event) = outcome {
                                let _ = events.try_push(event);
                            }
                            if report.outcome.ends_round() {
                                self.last_length = Some(session.snake().len());
                                Some(Screen::Menu)
                            } else {
                                None
                            }
                        }
                        None => None,
                    }
                }
            }
            GameState::Settings => {
                if edges.back || edges.escape {
                    Some(Screen::Menu)
                } else {
                    None
                }
            }
            GameState::Exit => None,
        };

        if let Some(screen) = next {
            self.transition(screen, &mut events);
        }
        events
    }

    fn transition(&mut self, screen: Screen, events: &mut Events) {
        let from = self.screen();
        match screen {
            Screen::Playing => {
                self.enter_playing(events);
                return;
            }
            Screen::Menu => {
                // Coming back from settings keeps the cursor on "Settings".
                let selected = if from == Screen::Settings {
                    MenuItem::Settings
                } else {
                    MenuItem::Start
                };
                self.state = GameState::Menu { selected };
            }
            Screen::Settings => self.state = GameState::Settings,
            Screen::Exit => {
                self.state = GameState::Exit;
                let _ = events.try_push(GameEvent::ExitRequested);
            }
        }
        info!("screen {:?} -> {:?}", from, screen);
        let _ = events.try_push(GameEvent::StateChanged(screen));
    }

    fn enter_playing(&mut self, events: &mut Events) {
        let seed = self.seeds.next_u32();
        self.rounds += 1;
        self.state = GameState::Playing(Box::new(GameSession::new(&self.config, seed)));
        info!("round {} started", self.rounds);
        let _ = events.try_push(GameEvent::Started);
        let _ = events.try_push(GameEvent::StateChanged(Screen::Playing));
    }

    /// Draw list for the current frame.
    pub fn render(&self) -> Vec<DrawCommand> {
        let mut out = Vec::new();
        self.render_into(&mut out);
        out
    }

    /// Clears `out` and fills it with this frame's draw commands.
    pub fn render_into(&self, out: &mut Vec<DrawCommand>) {
        out.clear();
        let renderer = InterpolationRenderer::new(self.config.geometry());
        match &self.state {
            GameState::Menu { selected } => renderer.menu_into(*selected, out),
            GameState::Playing(session) => {
                self.render_session_into(session, session.elapsed_fraction(), out)
            }
            GameState::Settings => renderer.settings_into(out),
            GameState::Exit => {}
        }
    }

    /// Draw list with an explicit tick fraction (Playing only).
    pub fn render_at(&self, fraction: f32) -> Vec<DrawCommand> {
        let mut out = Vec::new();
        if let Some(session) = self.session() {
            self.render_session_into(session, fraction, &mut out);
        }
        out
    }

    fn render_session_into(&self, session: &GameSession, fraction: f32, out: &mut Vec<DrawCommand>) {
        let renderer = InterpolationRenderer::new(*session.geometry());
        renderer.border_into(out);
        if let Some(food) = session.food() {
            renderer.food_into(food, out);
        }
        renderer.snake_into(
            session.previous(),
            session.snake(),
            session.direction(),
            fraction,
            out,
        );
    }
}

impl Default for GameLoopController {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
