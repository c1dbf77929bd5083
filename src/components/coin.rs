use bevy_ecs::prelude::Component;

/// Side length of a coin, in playfield units. Used only for off-screen
/// retirement, not for the collection overlap test.
pub const COIN_SIZE: f32 = 20.0;

/// Score awarded for collecting one coin.
pub const COIN_VALUE: u32 = 10;

/// Marker for collectible coins. Spawned at the right playfield edge at a
/// random height within the safe band; despawned on collection.
#[derive(Component, Clone, Copy, Debug)]
pub struct Coin;
