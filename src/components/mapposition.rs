use bevy_ecs::prelude::Component;

/// World-space position in playfield units. Origin is the top-left corner
/// and `y` grows downward.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
