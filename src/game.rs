//! Run lifecycle: guarded transition requests and state enter hooks.
//!
//! The state machine is Menu → Playing → GameOver → {Playing, Menu}, with
//! ViewingScores reachable from Menu only. The request systems in this
//! module validate the current state before marking a transition pending;
//! invalid requests log a warning and change nothing. The enter hooks
//! (`enter_play`, `commit_score`) are invoked by the gamestate observer when
//! a transition is applied.
//!
//! All of these are registered by name in the
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) so the
//! driver, tests, or a UI shell can run them without direct coupling.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemId;
use log::{info, warn};

use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::player::Player;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::highscores::{HighScores, ScoreEntry};
use crate::resources::input::InputState;
use crate::resources::ledger::{LedgerBridge, LedgerCmd};
use crate::resources::playfield::Playfield;
use crate::resources::score::Score;
use crate::resources::spawntimer::SpawnTimers;
use crate::resources::systemsstore::SystemsStore;

/// Register all lifecycle systems under their well-known names and insert
/// the populated [`SystemsStore`].
///
/// Registered systems are entities in bevy_ecs; they are marked
/// [`Persistent`] so run resets leave them alone.
pub fn register_lifecycle_systems(world: &mut World) {
    let mut store = SystemsStore::new();
    let systems: [(&str, SystemId); 6] = [
        ("start_game", world.register_system(start_game)),
        ("enter_play", world.register_system(enter_play)),
        ("commit_score", world.register_system(commit_score)),
        ("to_menu", world.register_system(to_menu)),
        ("view_scores", world.register_system(view_scores)),
        ("reset_scores", world.register_system(reset_scores)),
    ];
    for (name, id) in systems {
        world.entity_mut(id.entity()).insert(Persistent);
        store.insert(name, id);
    }
    world.insert_resource(store);
}

/// Request the transition into a fresh run. Valid from Menu and GameOver.
pub fn start_game(state: Res<GameState>, mut next_state: ResMut<NextGameState>) {
    match state.get() {
        GameStates::Menu | GameStates::GameOver => next_state.set(GameStates::Playing),
        other => warn!("start_game ignored in {:?}", other),
    }
}

/// Enter hook for Playing: reset the run.
///
/// Despawns every non-persistent entity that lives on the playfield, zeroes
/// the score, rewinds the spawn timers, drops any stale input, and spawns
/// the runner at the start position.
pub fn enter_play(
    mut commands: Commands,
    playfield: Res<Playfield>,
    mut score: ResMut<Score>,
    mut timers: ResMut<SpawnTimers>,
    mut input: ResMut<InputState>,
    run_entities: Query<Entity, (With<MapPosition>, Without<Persistent>)>,
) {
    for entity in run_entities.iter() {
        commands.entity(entity).despawn();
    }
    score.reset();
    timers.reset();
    input.clear();
    commands.spawn((Player::new(), playfield.player_start()));
    info!("run started");
}

/// Enter hook for GameOver: commit the finished run's score.
///
/// Submits the entry to the in-memory ledger and hands the resulting
/// snapshot to the persistence thread. Runs exactly once per run because the
/// Playing → GameOver transition is applied exactly once.
pub fn commit_score(
    score: Res<Score>,
    mut highscores: ResMut<HighScores>,
    ledger: Option<Res<LedgerBridge>>,
) {
    let entry = ScoreEntry::now(score.value);
    info!("run over with {} points", entry.score);
    highscores.submit(entry);
    match ledger {
        Some(ledger) => {
            if ledger
                .tx
                .send(LedgerCmd::Save(highscores.entries.clone()))
                .is_err()
            {
                warn!("persistence thread is gone; score not saved");
            }
        }
        None => warn!("no ledger attached; score not saved"),
    }
}

/// Request the transition back to the menu. Valid from GameOver and
/// ViewingScores.
pub fn to_menu(state: Res<GameState>, mut next_state: ResMut<NextGameState>) {
    match state.get() {
        GameStates::GameOver | GameStates::ViewingScores => next_state.set(GameStates::Menu),
        other => warn!("to_menu ignored in {:?}", other),
    }
}

/// Request the high-score screen. Valid from Menu only.
pub fn view_scores(state: Res<GameState>, mut next_state: ResMut<NextGameState>) {
    match state.get() {
        GameStates::Menu => next_state.set(GameStates::ViewingScores),
        other => warn!("view_scores ignored in {:?}", other),
    }
}

/// Clear the high-score ledger, in memory and on disk. Valid in Menu; does
/// not change the run state.
pub fn reset_scores(
    state: Res<GameState>,
    mut highscores: ResMut<HighScores>,
    ledger: Option<Res<LedgerBridge>>,
) {
    if !matches!(state.get(), GameStates::Menu) {
        warn!("reset_scores ignored in {:?}", state.get());
        return;
    }
    highscores.clear();
    if let Some(ledger) = ledger {
        if ledger.tx.send(LedgerCmd::Clear).is_err() {
            warn!("persistence thread is gone; ledger file not cleared");
        }
    }
    info!("high scores reset");
}
