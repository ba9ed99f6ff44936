//! Flappy - a single-screen flap-through-the-pipes arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `renderer`: Render surface port and frame drawing
//! - `platform`: Input mapping, spawn timer and the session driver
//! - `persistence`: Best score storage
//! - `tuning`: Data-driven gameplay constants

pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use platform::Session;
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Logical playfield size in pixels
    pub const GAME_WIDTH: f32 = 360.0;
    pub const GAME_HEIGHT: f32 = 640.0;

    /// Bird hitbox
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 24.0;

    /// Pipe sprite size
    pub const PIPE_WIDTH: f32 = 64.0;
    pub const PIPE_HEIGHT: f32 = 512.0;

    /// Leftward pipe motion per tick
    pub const SCROLL_SPEED: f32 = 2.0;
    /// Added to the bird's vertical velocity every tick
    pub const GRAVITY: f32 = 0.32;
    /// Terminal fall speed per tick
    pub const MAX_FALL: f32 = 6.5;
    /// Velocity set by a flap (negative is up)
    pub const FLAP_IMPULSE: f32 = -8.0;

    /// Wall-clock seconds between pipe pairs
    pub const SPAWN_INTERVAL_SECS: f32 = 1.5;
    /// Nominal display refresh used by the headless driver
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}
