use bevy_ecs::prelude::Component;

/// Side length of an obstacle, in playfield units. Used only to decide when
/// the obstacle has fully scrolled off the left edge; the lethal overlap test
/// uses the player's size instead.
pub const OBSTACLE_SIZE: f32 = 30.0;

/// Marker for lethal obstacles. Spawned at the right playfield edge at floor
/// height; never changes vertical position after creation.
#[derive(Component, Clone, Copy, Debug)]
pub struct Obstacle;
