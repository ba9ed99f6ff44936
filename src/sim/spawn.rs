//! Pipe pair generation

use rand::Rng;

use super::collision::Rect;
use super::state::{Obstacle, ObstacleKind};
use crate::tuning::Tuning;

/// Top edge of the upper pipe for a uniform draw `r` in `[0, 1)`.
///
/// The upper pipe always hangs between a quarter and three quarters of its
/// height above the screen.
pub fn gap_anchor_y(tuning: &Tuning, r: f32) -> f32 {
    -tuning.pipe_height / 4.0 - r * (tuning.pipe_height / 2.0)
}

/// Build an upper/lower pipe pair just past the right edge
pub fn spawn_pair(tuning: &Tuning, rng: &mut impl Rng) -> (Obstacle, Obstacle) {
    let r: f32 = rng.random();
    pair_at(tuning, gap_anchor_y(tuning, r))
}

/// Pair whose upper pipe's top edge sits at `anchor_y`
pub fn pair_at(tuning: &Tuning, anchor_y: f32) -> (Obstacle, Obstacle) {
    let x = tuning.game_width;
    let upper = Obstacle::new(
        ObstacleKind::Upper,
        Rect::new(x, anchor_y, tuning.pipe_width, tuning.pipe_height),
    );
    let lower = Obstacle::new(
        ObstacleKind::Lower,
        Rect::new(
            x,
            anchor_y + tuning.pipe_height + tuning.gap_size(),
            tuning.pipe_width,
            tuning.pipe_height,
        ),
    );
    (upper, lower)
}
