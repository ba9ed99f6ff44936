//! Rendering port
//!
//! The simulation never draws. Hosts implement [`RenderSurface`] and
//! [`draw_frame`] feeds it the rectangles of the current state.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::sim::{GameState, ObstacleKind, Rect};

/// Something that can show a frame of the game
pub trait RenderSurface {
    /// Wipe the previous frame
    fn clear(&mut self);
    fn draw_obstacle(&mut self, rect: Rect, kind: ObstacleKind);
    fn draw_bird(&mut self, rect: Rect);
    /// Overlay shown while the round is over
    fn draw_game_over(&mut self);
}

/// Draw the whole playfield.
///
/// Pipes first so the bird stays on top; when the round is over the frozen
/// final frame is drawn with the overlay.
pub fn draw_frame(state: &GameState, surface: &mut impl RenderSurface) {
    surface.clear();
    for obstacle in &state.obstacles {
        surface.draw_obstacle(obstacle.rect, obstacle.kind);
    }
    surface.draw_bird(state.bird.rect());
    if state.is_over() {
        surface.draw_game_over();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear,
        Obstacle(ObstacleKind),
        Bird(Rect),
        GameOver,
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
    }

    impl RenderSurface for RecordingSurface {
        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn draw_obstacle(&mut self, _rect: Rect, kind: ObstacleKind) {
            self.calls.push(Call::Obstacle(kind));
        }

        fn draw_bird(&mut self, rect: Rect) {
            self.calls.push(Call::Bird(rect));
        }

        fn draw_game_over(&mut self) {
            self.calls.push(Call::GameOver);
        }
    }

    #[test]
    fn test_draw_order() {
        let mut state = GameState::new(Tuning::default(), 1, 0);
        state.spawn_obstacles();

        let mut surface = RecordingSurface::default();
        draw_frame(&state, &mut surface);

        assert_eq!(
            surface.calls,
            vec![
                Call::Clear,
                Call::Obstacle(ObstacleKind::Upper),
                Call::Obstacle(ObstacleKind::Lower),
                Call::Bird(Rect::new(45.0, 320.0, 34.0, 24.0)),
            ]
        );
    }

    #[test]
    fn test_game_over_overlay() {
        let mut state = GameState::new(Tuning::default(), 1, 0);
        state.end_game();

        let mut surface = RecordingSurface::default();
        draw_frame(&state, &mut surface);

        assert_eq!(surface.calls.last(), Some(&Call::GameOver));
    }
}
