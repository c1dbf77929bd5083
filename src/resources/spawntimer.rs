//! Edge-triggered spawn timers.
//!
//! Spawning is driven by accumulating the frame delta and firing once the
//! configured period has elapsed. The timer resets by subtracting the period
//! instead of zeroing, so timing stays accurate across irregular tick rates:
//! exactly one spawn is produced per period regardless of where tick
//! boundaries fall, and a very large delta is caught up one fire per tick.

use bevy_ecs::prelude::Resource;

/// Seconds between obstacle spawns.
pub const OBSTACLE_SPAWN_PERIOD: f32 = 1.5;
/// Seconds between coin spawns.
pub const COIN_SPAWN_PERIOD: f32 = 2.0;

/// Accumulating periodic trigger.
#[derive(Debug, Clone, Copy)]
pub struct SpawnTimer {
    /// Seconds between fires.
    pub period: f32,
    /// Time accumulated since the last fire.
    pub elapsed: f32,
}

impl SpawnTimer {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
        }
    }

    /// Accumulate `delta` seconds and report whether the period elapsed.
    ///
    /// Fires at most once per call; the remainder past the period is kept,
    /// so a missed period fires on the next call.
    pub fn advance(&mut self, delta: f32) -> bool {
        self.elapsed += delta;
        if self.elapsed >= self.period {
            self.elapsed -= self.period;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// The two spawn timers of a run, one per entity kind.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SpawnTimers {
    pub obstacles: SpawnTimer,
    pub coins: SpawnTimer,
}

impl Default for SpawnTimers {
    fn default() -> Self {
        Self {
            obstacles: SpawnTimer::new(OBSTACLE_SPAWN_PERIOD),
            coins: SpawnTimer::new(COIN_SPAWN_PERIOD),
        }
    }
}

impl SpawnTimers {
    /// Rewind both timers to the start of their period. Called when a new
    /// run starts.
    pub fn reset(&mut self) {
        self.obstacles.reset();
        self.coins.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_no_fire_before_period() {
        let mut timer = SpawnTimer::new(1.5);
        assert!(!timer.advance(0.5));
        assert!(!timer.advance(0.5));
        assert!(approx_eq(timer.elapsed, 1.0));
    }

    #[test]
    fn test_fires_on_period_boundary() {
        let mut timer = SpawnTimer::new(1.5);
        timer.advance(0.5);
        timer.advance(0.5);
        assert!(timer.advance(0.5));
        assert!(approx_eq(timer.elapsed, 0.0));
    }

    #[test]
    fn test_keeps_remainder() {
        let mut timer = SpawnTimer::new(1.5);
        assert!(timer.advance(1.6));
        assert!(approx_eq(timer.elapsed, 0.1));
    }

    #[test]
    fn test_catches_up_one_fire_per_call() {
        let mut timer = SpawnTimer::new(1.5);
        // Huge delta: one fire now, the backlog drains on later calls.
        assert!(timer.advance(3.2));
        assert!(approx_eq(timer.elapsed, 1.7));
        assert!(timer.advance(0.0));
        assert!(approx_eq(timer.elapsed, 0.2));
        assert!(!timer.advance(0.0));
    }

    #[test]
    fn test_exactly_one_fire_per_period() {
        let mut timer = SpawnTimer::new(1.5);
        let mut fires = 0;
        // 90 ticks of 0.1 s = 9 s = 6 full periods.
        for _ in 0..90 {
            if timer.advance(0.1) {
                fires += 1;
            }
        }
        assert_eq!(fires, 6);
    }

    #[test]
    fn test_reset() {
        let mut timers = SpawnTimers::default();
        timers.obstacles.advance(1.0);
        timers.coins.advance(1.9);
        timers.reset();
        assert!(approx_eq(timers.obstacles.elapsed, 0.0));
        assert!(approx_eq(timers.coins.elapsed, 0.0));
    }
}
