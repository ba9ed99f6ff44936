//! Session driver
//!
//! Owns the game state together with its collaborators and is the one place
//! a host calls into. Frame and spawn callbacks must be serialized by the
//! host (the browser driver holds the session in a `RefCell`).

use crate::persistence::ScoreStore;
use crate::platform::input::{Command, InputEvent};
use crate::platform::time::SpawnTimer;
use crate::platform::ScoreDisplay;
use crate::renderer::{RenderSurface, draw_frame};
use crate::sim::{GameEvent, GameState, tick};
use crate::tuning::Tuning;

/// A running game bound to a best-score store
pub struct Session<S: ScoreStore> {
    state: GameState,
    store: S,
    spawn_timer: SpawnTimer,
}

impl<S: ScoreStore> Session<S> {
    /// Start a session, reading the best score from `store`
    pub fn new(tuning: Tuning, seed: u64, store: S) -> Self {
        let best = store.load();
        let spawn_timer = SpawnTimer::new(tuning.spawn_interval_secs);
        log::info!("Session started (seed {}, best {})", seed, best);
        Self {
            state: GameState::new(tuning, seed, best),
            store,
            spawn_timer,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one display frame of simulation
    pub fn frame(&mut self) {
        tick(&mut self.state);
        self.flush_events();
    }

    /// Spawn-timer callback: add a pipe pair
    pub fn spawn(&mut self) {
        self.state.spawn_obstacles();
    }

    /// Headless driving: feed `dt` seconds to the spawn timer, then run one
    /// frame. Hosts with their own interval timer call `spawn` and `frame`
    /// directly instead.
    pub fn advance(&mut self, dt: f32) {
        for _ in 0..self.spawn_timer.advance(dt) {
            self.spawn();
        }
        self.frame();
    }

    /// Apply a host input event
    pub fn input(&mut self, event: InputEvent) {
        match event.command() {
            Some(Command::Flap) => self.state.flap(),
            Some(Command::Restart) => self.state.reset(),
            None => {}
        }
    }

    /// Draw the current frame
    pub fn render(&self, surface: &mut impl RenderSurface) {
        draw_frame(&self.state, surface);
    }

    /// Push score and best to a display
    pub fn show_score(&self, display: &mut impl ScoreDisplay) {
        display.show(self.state.score, self.state.best);
    }

    /// Forward pending events to collaborators
    fn flush_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::NewBest { best } => self.store.save(best),
                GameEvent::Scored { score } => log::debug!("Score {}", score),
                GameEvent::GameOver { .. } => {}
            }
        }
    }
}
