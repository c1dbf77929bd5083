//! Scroll-and-retire behavior component.
//!
//! Obstacles and coins share the same horizontal motion: every tick their
//! `x` decreases by the global scroll speed, and once an entity has fully
//! crossed the left playfield edge it is despawned. The [`Scrolling`]
//! component carries the entity size the retirement check needs.

use bevy_ecs::prelude::Component;

/// Attached to entities that scroll leftward with the world and retire once
/// fully past the left edge.
#[derive(Component, Clone, Copy, Debug)]
pub struct Scrolling {
    /// Entity side length in playfield units.
    pub size: f32,
}

impl Scrolling {
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    /// True once the entity at `x` has fully crossed the left edge.
    pub fn off_screen(&self, x: f32) -> bool {
        x <= -self.size
    }
}
