//! Player vertical physics.
//!
//! Advances the runner's jump/gravity kinematics once per tick. Constants
//! are expressed per tick, not per second: the simulation is deliberately
//! tied to the tick rate, matching the arcade feel of the game.
//!
//! The system never performs I/O. Falling out of the top of the playfield
//! requests run termination through
//! [`NextGameState`](crate::resources::gamestate::NextGameState); the state
//! observer applies the transition and triggers the score commit.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::playfield::Playfield;

/// Downward acceleration added to the runner's velocity every tick.
pub const GRAVITY_PER_TICK: f32 = 0.6;

/// Velocity set by a jump activation. Negative is up.
pub const JUMP_IMPULSE: f32 = -12.0;

/// Advance the runner's vertical state for one tick.
///
/// Contract, in order:
/// - an activation this tick with jump budget left sets
///   `velocity = JUMP_IMPULSE` and spends one jump;
/// - gravity is always applied, then `y += velocity`;
/// - reaching the floor clamps `y`, zeroes velocity, and refills the jump
///   budget;
/// - leaving through the top clamps `y` to 0 and requests the transition to
///   [`GameStates::GameOver`].
pub fn player_physics(
    mut query: Query<(&mut MapPosition, &mut Player)>,
    input: Res<InputState>,
    playfield: Res<Playfield>,
    mut next_state: ResMut<NextGameState>,
) {
    let floor_y = playfield.floor_y();
    for (mut position, mut player) in query.iter_mut() {
        if input.activated() && player.can_jump() {
            player.jump(JUMP_IMPULSE);
        }

        player.velocity += GRAVITY_PER_TICK;
        position.y += player.velocity;

        if position.y >= floor_y {
            position.y = floor_y;
            player.land();
        }

        if position.y < 0.0 {
            position.y = 0.0;
            next_state.set(GameStates::GameOver);
        }
    }
}
