//! Per-frame simulation step
//!
//! Core game loop: one call advances the session by one display frame.

use super::collision::overlaps;
use super::state::{GameEvent, GameState, ObstacleKind};

/// Advance the game state by one frame. Does nothing once the round is over.
pub fn tick(state: &mut GameState) {
    if state.is_over() {
        return;
    }
    state.time_ticks += 1;

    state.bird.integrate(state.tuning.gravity, state.tuning.max_fall);

    // Ground contact freezes the round before any pipe moves
    let ground = state.tuning.game_height - state.bird.size.y;
    if state.bird.pos.y >= ground {
        state.bird.pos.y = ground;
        state.end_game();
        return;
    }

    let scroll_speed = state.tuning.scroll_speed;
    let bird_left = state.bird.pos.x;
    for obstacle in &mut state.obstacles {
        obstacle.rect.pos.x -= scroll_speed;

        // Only the upper pipe of a pair scores
        if obstacle.kind == ObstacleKind::Upper
            && !obstacle.passed
            && obstacle.rect.right() < bird_left
        {
            obstacle.passed = true;
            state.score += 1;
            state.events.push(GameEvent::Scored { score: state.score });
        }
    }

    let bird = state.bird.rect();
    if state.obstacles.iter().any(|o| overlaps(&bird, &o.rect)) {
        state.end_game();
    }

    prune_offscreen(state);
}

/// Drop pipes that have fully left the screen.
///
/// Pipes are stored in spawn order, which is also left-to-right order, so
/// only the front of the list needs checking.
pub fn prune_offscreen(state: &mut GameState) {
    let gone = state
        .obstacles
        .iter()
        .take_while(|o| o.rect.right() < 0.0)
        .count();
    state.obstacles.drain(..gone);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::Rect;
    use crate::sim::spawn::pair_at;
    use crate::sim::state::{GamePhase, Obstacle};
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(Tuning::default(), 12345, 0)
    }

    /// Upper pipe far above the bird, lower pipe far below
    fn harmless_pair(x: f32) -> [Obstacle; 2] {
        [
            Obstacle::new(ObstacleKind::Upper, Rect::new(x, -600.0, 64.0, 512.0)),
            Obstacle::new(ObstacleKind::Lower, Rect::new(x, 620.0, 64.0, 512.0)),
        ]
    }

    #[test]
    fn test_flap_then_fall_to_ground() {
        let mut state = state();
        state.flap();
        assert_eq!(state.bird.velocity_y, -8.0);

        for _ in 0..100 {
            tick(&mut state);
        }

        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.bird.pos.y, 640.0 - 24.0);
    }

    #[test]
    fn test_ground_skips_pipe_motion() {
        let mut state = state();
        state.obstacles.extend(harmless_pair(200.0));
        state.bird.pos.y = 615.0;
        state.bird.velocity_y = 6.5;

        tick(&mut state);

        assert!(state.is_over());
        assert_eq!(state.bird.pos.y, 616.0);
        assert_eq!(state.obstacles[0].rect.left(), 200.0);
    }

    #[test]
    fn test_tick_is_noop_when_over() {
        let mut state = state();
        state.obstacles.extend(harmless_pair(200.0));
        state.end_game();
        let bird = state.bird.clone();

        tick(&mut state);

        assert_eq!(state.bird, bird);
        assert_eq!(state.obstacles[0].rect.left(), 200.0);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_pipes_scroll_left() {
        let mut state = state();
        state.obstacles.extend(harmless_pair(300.0));
        tick(&mut state);
        assert!(state.obstacles.iter().all(|o| o.rect.left() == 298.0));
    }

    #[test]
    fn test_score_once_per_upper_pipe() {
        let mut state = state();
        // Right edge 46 > bird.x 45; after one tick it is 44
        state.obstacles.extend(harmless_pair(-18.0));

        tick(&mut state);
        assert_eq!(state.score, 1);
        assert!(state.obstacles[0].passed);
        assert!(!state.obstacles[1].passed);

        tick(&mut state);
        assert_eq!(state.score, 1);
        assert_eq!(state.drain_events(), vec![GameEvent::Scored { score: 1 }]);
    }

    #[test]
    fn test_right_edge_on_bird_edge_does_not_score() {
        let mut state = state();
        // After one tick the right edge lands exactly on bird.x
        state.obstacles.extend(harmless_pair(-17.0));
        tick(&mut state);
        assert_eq!(state.score, 0);
        tick(&mut state);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_spawned_pair_scores_once() {
        let mut state = state();
        state.spawn_obstacles();

        // Keep the bird alive inside the gap while the pair scrolls past
        let gap_center = state.obstacles[0].rect.bottom() + state.tuning.gap_size() / 2.0;
        for _ in 0..250 {
            state.bird.pos.y = gap_center - state.bird.size.y / 2.0;
            state.bird.velocity_y = 0.0;
            tick(&mut state);
        }

        assert!(!state.is_over());
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_pipe_collision_ends_round() {
        let mut state = state();
        // Upper pipe hanging down to y=400, reaching the bird's x next tick
        state
            .obstacles
            .push(Obstacle::new(ObstacleKind::Upper, Rect::new(80.0, -112.0, 64.0, 512.0)));

        tick(&mut state);

        assert!(state.is_over());
        assert_eq!(state.drain_events(), vec![GameEvent::GameOver { score: 0 }]);
    }

    #[test]
    fn test_lower_pipe_collision_ends_round() {
        let tuning = Tuning::default();
        let mut state = state();
        // Gap well above the bird; lower pipe top at y=300
        let (upper, mut lower) = pair_at(&tuning, -372.0);
        lower.rect.pos.x = 50.0;
        state.obstacles.push(upper);
        state.obstacles.push(lower);

        tick(&mut state);
        assert!(state.is_over());
    }

    #[test]
    fn test_prune_front_only() {
        let mut state = state();
        state
            .obstacles
            .push(Obstacle::new(ObstacleKind::Upper, Rect::new(-65.0, -600.0, 64.0, 512.0)));
        state
            .obstacles
            .push(Obstacle::new(ObstacleKind::Lower, Rect::new(5.0, 620.0, 64.0, 512.0)));

        prune_offscreen(&mut state);

        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].rect.left(), 5.0);

        prune_offscreen(&mut state);
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_tick_prunes_offscreen_pipe() {
        let mut state = state();
        // Scrolls to x = -3, right edge 61 is still on screen
        state.obstacles.extend(harmless_pair(-1.0));
        tick(&mut state);
        assert_eq!(state.obstacles.len(), 2);

        // x = -63 -> -65 after scroll, right edge -1
        let mut state = GameState::new(Tuning::default(), 1, 0);
        state.obstacles.extend(harmless_pair(-63.0));
        state.obstacles.extend(harmless_pair(5.0));
        tick(&mut state);
        assert_eq!(state.obstacles.len(), 2);
        assert_eq!(state.obstacles[0].rect.left(), 3.0);
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and inputs stay identical
        let mut state1 = GameState::new(Tuning::default(), 99999, 0);
        let mut state2 = GameState::new(Tuning::default(), 99999, 0);

        for frame in 0..300 {
            if frame % 90 == 0 {
                state1.spawn_obstacles();
                state2.spawn_obstacles();
            }
            if frame % 20 == 0 {
                state1.flap();
                state2.flap();
            }
            tick(&mut state1);
            tick(&mut state2);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.bird, state2.bird);
        assert_eq!(state1.obstacles, state2.obstacles);
        assert_eq!(state1.score, state2.score);
    }
}
