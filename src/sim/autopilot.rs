//! Idle/demo mode - the game plays itself
//!
//! Used by the headless native run and handy for soak tests. It is a simple
//! reactive rule and does lose on steep gap changes.

use super::state::{GameState, ObstacleKind};

/// Clearance kept above the gap floor
const FLAP_MARGIN: f32 = 10.0;

/// Floor (lower pipe's top edge) of the next gap the bird still has to clear
pub fn next_gap_floor(state: &GameState) -> Option<f32> {
    let bird_left = state.bird.pos.x;
    state
        .obstacles
        .iter()
        .find(|o| o.kind == ObstacleKind::Upper && o.rect.right() >= bird_left)
        .map(|upper| upper.rect.bottom() + state.tuning.gap_size())
}

/// Decide whether to flap this frame.
///
/// Flaps when the bird's bottom edge would sink within `FLAP_MARGIN` of the
/// gap floor on the next tick. With no pipe ahead it holds mid-screen.
pub fn should_flap(state: &GameState) -> bool {
    if state.is_over() {
        return false;
    }
    let tuning = &state.tuning;
    let floor = next_gap_floor(state).unwrap_or((tuning.game_height + tuning.gap_size()) / 2.0);
    state.bird.rect().bottom() + state.bird.velocity_y > floor - FLAP_MARGIN
}
