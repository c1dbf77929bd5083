//! Runner state component.
//!
//! The [`Player`] component stores the runner's vertical velocity and the
//! number of jumps spent since it last touched the floor. Horizontal motion
//! does not exist in this simulation; the world scrolls instead.
//!
//! The jump budget allows a double jump: an activation is honored only while
//! `jumps < MAX_JUMPS`, and the budget refills the moment the runner lands.

use bevy_ecs::prelude::Component;

/// Collision half-extent of the runner, in playfield units. The overlap test
/// uses this value on both axes for obstacles and coins alike, regardless of
/// their own size.
pub const PLAYER_SIZE: f32 = 40.0;

/// Jumps available between two floor contacts.
pub const MAX_JUMPS: u8 = 2;

/// Vertical kinematic state of the runner.
///
/// Updated once per tick by the physics system; read by the collision
/// system through the entity's [`MapPosition`](super::mapposition::MapPosition).
#[derive(Component, Clone, Copy, Debug)]
pub struct Player {
    /// Current vertical velocity in playfield units per tick. Negative is up.
    pub velocity: f32,
    /// Jumps spent since the last floor contact (0, 1, or 2).
    pub jumps: u8,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Create a resting runner: zero velocity, full jump budget.
    pub fn new() -> Self {
        Self {
            velocity: 0.0,
            jumps: 0,
        }
    }

    /// Whether the jump budget still allows an activation.
    pub fn can_jump(&self) -> bool {
        self.jumps < MAX_JUMPS
    }

    /// Apply a jump impulse and spend one jump from the budget.
    pub fn jump(&mut self, impulse: f32) {
        self.velocity = impulse;
        self.jumps = self.jumps.saturating_add(1);
    }

    /// Settle on the floor: zero velocity, refill the jump budget.
    pub fn land(&mut self) {
        self.velocity = 0.0;
        self.jumps = 0;
    }
}
