//! Fixed-interval spawn timer
//!
//! Pipe pairs arrive on a wall-clock cadence that is independent of how
//! often frames are drawn.

/// Accumulates elapsed seconds and reports whole intervals
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval: f32,
    accumulator: f32,
}

impl SpawnTimer {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulator: 0.0,
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Add elapsed time, returning how many intervals completed
    pub fn advance(&mut self, dt: f32) -> u32 {
        if self.interval <= 0.0 {
            return 0;
        }
        self.accumulator += dt.max(0.0);

        let mut fired = 0;
        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            fired += 1;
        }
        fired
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
