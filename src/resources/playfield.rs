//! Playfield dimensions resource.
//!
//! The playfield is the fixed 2D coordinate space in which entities move:
//! origin top-left, `y` growing downward. Dimensions are injected once at
//! startup and never change for the lifetime of a run.

use bevy_ecs::prelude::Resource;

use crate::components::mapposition::MapPosition;

/// Distance of the floor line from the bottom playfield edge.
pub const FLOOR_MARGIN: f32 = 100.0;

/// Fixed playfield dimensions in playfield units.
#[derive(Resource, Clone, Copy, Debug)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Vertical coordinate of the floor line the runner rests on.
    pub fn floor_y(&self) -> f32 {
        self.height - FLOOR_MARGIN
    }

    /// Initial runner position: a quarter across the field, on the floor.
    pub fn player_start(&self) -> MapPosition {
        MapPosition::new(self.width * 0.25, self.floor_y())
    }
}
