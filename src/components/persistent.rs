//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component will not be despawned when a
//! new run starts. Use this for observers, registered lifecycle systems, or
//! any entity that must survive run resets.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should persist across run resets.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
