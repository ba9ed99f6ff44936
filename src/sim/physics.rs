//! Vertical motion of the bird
//!
//! Frame-locked: every quantity is per tick, there is no `dt` scaling.

use super::state::Bird;

impl Bird {
    /// Apply one tick of gravity, capped at `max_fall`, and move.
    ///
    /// The bird can never leave the top of the screen; `y` clamps at 0.
    pub fn integrate(&mut self, gravity: f32, max_fall: f32) {
        self.velocity_y = (self.velocity_y + gravity).min(max_fall);
        self.pos.y = (self.pos.y + self.velocity_y).max(0.0);
    }

    /// Replace the current velocity with the flap impulse (no stacking)
    pub fn flap(&mut self, impulse: f32) {
        self.velocity_y = impulse;
    }
}
