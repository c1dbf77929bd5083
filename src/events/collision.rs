//! Collision event types and their observers.
//!
//! The collision detector emits [`PlayerObstacleHit`] for every lethal
//! overlap and [`CoinCollected`] for every coin overlap found in a tick.
//! The observers here carry out the consequences:
//!
//! - a lethal hit requests the transition to game over, which the state
//!   machinery applies at most once per run regardless of how many hits
//!   land in the same tick;
//! - a collected coin is despawned and its bonus added to the score.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::coin::COIN_VALUE;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::score::Score;

/// Event fired when the runner overlaps an obstacle.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerObstacleHit {
    pub obstacle: Entity,
}

/// Event fired when the runner overlaps a coin.
#[derive(Event, Debug, Clone, Copy)]
pub struct CoinCollected {
    pub coin: Entity,
}

/// Observer that ends the run on a lethal hit.
pub fn observe_obstacle_hit(
    trigger: On<PlayerObstacleHit>,
    mut next_state: ResMut<NextGameState>,
) {
    debug!("lethal hit on {:?}", trigger.event().obstacle);
    next_state.set(GameStates::GameOver);
}

/// Observer that collects a coin: despawn it and award its bonus.
pub fn observe_coin_collected(
    trigger: On<CoinCollected>,
    mut commands: Commands,
    mut score: ResMut<Score>,
) {
    let coin = trigger.event().coin;
    debug!("collected coin {:?}", coin);
    commands.entity(coin).despawn();
    score.add(COIN_VALUE);
}
