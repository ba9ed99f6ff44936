//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-locked steps only (no `dt` scaling)
//! - Seeded RNG only
//! - Stable iteration order (pipes in spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, overlaps};
pub use spawn::spawn_pair;
pub use state::{Bird, GameEvent, GamePhase, GameState, Obstacle, ObstacleKind};
pub use tick::{prune_offscreen, tick};
