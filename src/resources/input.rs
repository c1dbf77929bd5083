//! Per-tick activation input resource.
//!
//! The driver records every activation event (touch or press) received
//! during a tick on the [`InputState`] resource before running the schedule,
//! and clears it afterwards. The physics system is the only consumer.

use bevy_ecs::prelude::Resource;

/// Activation events recorded for the current tick.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputState {
    /// Number of activation events received this tick.
    pub activations: u32,
}

impl InputState {
    /// Record one activation event.
    pub fn press(&mut self) {
        self.activations = self.activations.saturating_add(1);
    }

    /// Whether at least one activation event occurred this tick.
    pub fn activated(&self) -> bool {
        self.activations > 0
    }

    /// Forget this tick's events. Called by the driver after each tick.
    pub fn clear(&mut self) {
        self.activations = 0;
    }
}
