//! Platform abstraction layer
//!
//! Handles the glue between a host (browser or headless native loop) and the
//! simulation:
//! - Input events
//! - Spawn timing
//! - Score display
//! - The session driver that owns state and storage

pub mod input;
pub mod session;
pub mod time;

pub use input::{Command, InputEvent, Key};
pub use session::Session;
pub use time::SpawnTimer;

/// Receives the current score and best after every frame
pub trait ScoreDisplay {
    fn show(&mut self, score: u32, best: u32);
}

/// Score text in the shape the HUD uses
pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn best_text(best: u32) -> String {
    format!("Best: {}", best)
}
