//! Collision detection system.
//!
//! Once per tick, tests the runner against every obstacle (lethal) and every
//! coin (collectible), and applies the passive time-based score. The
//! detector only observes and triggers events; the consequences (requesting
//! game over, despawning a coin, awarding its bonus) live in the observers
//! in [`crate::events::collision`].
//!
//! All checks in one invocation read a single snapshot of positions. Coin
//! despawns are deferred commands, so they cannot perturb the obstacle
//! iteration of the same tick.

use bevy_ecs::prelude::*;

use crate::components::coin::Coin;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::Obstacle;
use crate::components::player::{PLAYER_SIZE, Player};
use crate::events::collision::{CoinCollected, PlayerObstacleHit};
use crate::resources::score::Score;

/// Axis-aligned overlap using the player's size as the half-extent on both
/// axes for both participants. Obstacle and coin sizes deliberately do not
/// participate in this test; they only matter for off-screen retirement.
fn overlaps(player: &MapPosition, other: &MapPosition) -> bool {
    (player.x - other.x).abs() < PLAYER_SIZE && (player.y - other.y).abs() < PLAYER_SIZE
}

/// Detect lethal and collectible overlaps and apply passive scoring.
///
/// Runs only while a run is active. A tick may collect several coins; a
/// tick may also trigger several lethal hits, which the state machinery
/// collapses into a single game-over transition.
pub fn collision_detector(
    players: Query<&MapPosition, With<Player>>,
    obstacles: Query<(Entity, &MapPosition), With<Obstacle>>,
    coins: Query<(Entity, &MapPosition), With<Coin>>,
    mut score: ResMut<Score>,
    mut commands: Commands,
) {
    // Time-based scoring: one point per active tick, collisions or not.
    score.add(1);

    for player_position in players.iter() {
        for (entity, position) in obstacles.iter() {
            if overlaps(player_position, position) {
                commands.trigger(PlayerObstacleHit { obstacle: entity });
            }
        }
        for (entity, position) in coins.iter() {
            if overlaps(player_position, position) {
                commands.trigger(CoinCollected { coin: entity });
            }
        }
    }
}
