//! Scroll-and-retire system.
//!
//! Every tick, every [`Scrolling`] entity moves left by [`SCROLL_SPEED`]
//! playfield units, and entities that have fully crossed the left edge are
//! despawned. Movement and retirement happen in the same pass, so no entity
//! ever survives more than one tick past its retirement threshold.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::scrolling::Scrolling;

/// Horizontal world scroll, in playfield units per tick. Shared by all
/// scrolling entity kinds.
pub const SCROLL_SPEED: f32 = 3.0;

/// Move all scrolling entities and retire the ones past the left edge.
pub fn scroll_entities(
    mut query: Query<(Entity, &mut MapPosition, &Scrolling)>,
    mut commands: Commands,
) {
    for (entity, mut position, scrolling) in query.iter_mut() {
        position.x -= SCROLL_SPEED;
        if scrolling.off_screen(position.x) {
            commands.entity(entity).despawn();
        }
    }
}
