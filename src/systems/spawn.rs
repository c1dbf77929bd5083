//! Obstacle and coin spawn systems.
//!
//! Both kinds spawn at the right playfield edge on an edge-triggered timer
//! (see [`SpawnTimers`]): obstacles on the floor line, coins at a random
//! height inside the safe band. Newly spawned entities are applied as
//! deferred commands, so they first scroll on the tick after their spawn and
//! always enter the field at full width.

use bevy_ecs::prelude::*;
use fastrand::Rng;

use crate::components::coin::{COIN_SIZE, Coin};
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::{OBSTACLE_SIZE, Obstacle};
use crate::components::scrolling::Scrolling;
use crate::resources::playfield::Playfield;
use crate::resources::spawntimer::SpawnTimers;
use crate::resources::worldtime::WorldTime;

/// Top of the band coins may spawn in.
pub const COIN_BAND_TOP: f32 = 50.0;
/// Gap kept between the bottom of the coin band and the floor line.
pub const COIN_FLOOR_GAP: f32 = 150.0;

/// Spawn one obstacle at the right edge, on the floor line, each time the
/// obstacle period elapses.
pub fn spawn_obstacles(
    time: Res<WorldTime>,
    mut timers: ResMut<SpawnTimers>,
    playfield: Res<Playfield>,
    mut commands: Commands,
) {
    if !timers.obstacles.advance(time.delta) {
        return;
    }
    commands.spawn((
        Obstacle,
        MapPosition::new(playfield.width, playfield.floor_y()),
        Scrolling::new(OBSTACLE_SIZE),
    ));
}

/// Spawn one coin at the right edge each time the coin period elapses.
///
/// The vertical placement is an independent uniform draw within
/// `[COIN_BAND_TOP, floor_y - COIN_FLOOR_GAP]`. A playfield too small for
/// the band collapses it to the top of the band instead of panicking.
pub fn spawn_coins(
    time: Res<WorldTime>,
    mut timers: ResMut<SpawnTimers>,
    playfield: Res<Playfield>,
    mut commands: Commands,
    mut rng: Local<Rng>,
) {
    if !timers.coins.advance(time.delta) {
        return;
    }
    let band = (playfield.floor_y() - COIN_FLOOR_GAP - COIN_BAND_TOP).max(0.0);
    let y = COIN_BAND_TOP + rng.f32() * band;
    commands.spawn((
        Coin,
        MapPosition::new(playfield.width, y),
        Scrolling::new(COIN_SIZE),
    ));
}
