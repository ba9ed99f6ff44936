//! Game state and core simulation types
//!
//! A session is one owned [`GameState`]; every simulation step and player
//! command receives it by `&mut`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::spawn::spawn_pair;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Round ended; only `reset` (or a flap) leaves this phase
    Over,
}

/// The player-controlled falling rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity in pixels per tick (positive is down)
    pub velocity_y: f32,
}

impl Bird {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.bird_start(),
            size: Vec2::new(tuning.bird_width, tuning.bird_height),
            velocity_y: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Which half of a gap pair an obstacle is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Hangs from the top; the only kind that scores
    Upper,
    /// Rises from the bottom
    Lower,
}

/// One scrolling pipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub rect: Rect,
    /// Set once the bird has cleared this pipe (scored-once guard)
    pub passed: bool,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, rect: Rect) -> Self {
        Self {
            kind,
            rect,
            passed: false,
        }
    }
}

/// Things that happened during a step, drained by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An upper pipe was cleared
    Scored { score: u32 },
    /// The round ended with this score
    GameOver { score: u32 },
    /// `best` was raised and should be persisted
    NewBest { best: u32 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Spawner RNG (seeded for reproducibility)
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub bird: Bird,
    /// Pipes in spawn order: oldest (leftmost) first
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Best score across sessions, only ever increases
    pub best: u32,
    /// Simulation tick counter for the current round
    pub time_ticks: u64,
    /// Pending events for the driver
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new running session
    pub fn new(tuning: Tuning, seed: u64, best: u32) -> Self {
        Self {
            bird: Bird::new(&tuning),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            obstacles: Vec::new(),
            score: 0,
            best,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// Start a fresh round, keeping `best`
    pub fn reset(&mut self) {
        self.bird = Bird::new(&self.tuning);
        self.obstacles.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        log::debug!("Round reset (best {})", self.best);
    }

    /// Player input: give the bird upward velocity.
    ///
    /// After game over the first flap restarts the round and flaps in the
    /// same call.
    pub fn flap(&mut self) {
        if self.is_over() {
            self.reset();
        }
        self.bird.flap(self.tuning.flap_impulse);
    }

    /// Transition `Running -> Over`. Repeated calls while over do nothing.
    pub fn end_game(&mut self) {
        if self.is_over() {
            return;
        }
        self.phase = GamePhase::Over;

        if self.score > self.best {
            self.best = self.score;
            self.events.push(GameEvent::NewBest { best: self.best });
            log::info!("New best score: {}", self.best);
        }
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!("Game over after {} ticks, score {}", self.time_ticks, self.score);
    }

    /// Push a new pipe pair at the right edge. No-op while over.
    pub fn spawn_obstacles(&mut self) {
        if self.is_over() {
            return;
        }
        let (upper, lower) = spawn_pair(&self.tuning, &mut self.rng);
        log::debug!(
            "Spawned pipe pair at x={} (upper bottom {:.1}, lower top {:.1})",
            upper.rect.left(),
            upper.rect.bottom(),
            lower.rect.top()
        );
        self.obstacles.push(upper);
        self.obstacles.push(lower);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
