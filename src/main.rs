//! Pixel Runner headless driver.
//!
//! The simulation core of a side-scrolling endless runner, built on:
//! - **bevy_ecs** for entity-component-system architecture
//! - **crossbeam-channel** for the background high-score persistence thread
//!
//! This executable is the game-loop driver: it owns the ECS world for the
//! duration of a run, feeds time and input into it once per tick, and runs
//! the simulation schedule. A display layer would read entity positions and
//! the score from the same world; none ships here, so the driver plays a
//! scripted run and logs the outcome.
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, build the ECS world and resources, load the ledger
//! 2. Register lifecycle systems and observers
//! 3. Request the first run and apply the transition
//! 4. Tick at the configured rate:
//!    - update `WorldTime`, record scripted jump activations
//!    - run physics, spawns, scrolling, and collision in order
//!    - clear per-tick input and change trackers
//! 5. On game over (or the tick budget), log the score and the ledger, then
//!    drain and join the persistence thread
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::components::persistent::Persistent;
use crate::events::collision::{observe_coin_collected, observe_obstacle_hit};
use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::highscores::HighScores;
use crate::resources::input::InputState;
use crate::resources::ledger::{setup_ledger, shutdown_ledger};
use crate::resources::playfield::Playfield;
use crate::resources::score::Score;
use crate::resources::spawntimer::SpawnTimers;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::collision_detector;
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::physics::player_physics;
use crate::systems::scroll::scroll_entities;
use crate::systems::spawn::{spawn_coins, spawn_obstacles};
use crate::systems::time::update_world_time;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::info;

/// Pixel Runner simulation core
#[derive(Parser)]
#[command(version, about = "Headless driver for the Pixel Runner simulation core")]
struct Cli {
    /// Maximum number of ticks to simulate.
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Fire a jump activation every N ticks (0 disables scripted input).
    #[arg(long, default_value_t = 45)]
    jump_every: u64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // GameConfig - missing file or keys fall back to compiled defaults
    let mut config = GameConfig::new();
    config.load_from_file().ok();

    let tick_rate = config.target_fps.max(1);
    let dt = 1.0 / tick_rate as f32;

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(Playfield::new(
        config.playfield_width as f32,
        config.playfield_height as f32,
    ));
    world.insert_resource(InputState::default());
    world.insert_resource(Score::default());
    world.insert_resource(SpawnTimers::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());

    // Loads the stored ledger and spawns the persistence thread.
    setup_ledger(&mut world, config.scores_path.clone());
    world.insert_resource(config);

    game::register_lifecycle_systems(&mut world);

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(observe_obstacle_hit), Persistent));
    world.spawn((Observer::new(observe_coin_collected), Persistent));
    // Ensure the observers are registered before any system triggers events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(check_pending_state);
    update.add_systems(
        // Fixed per-tick order: physics, spawns, scrolling, collision.
        (
            player_physics,
            spawn_obstacles,
            spawn_coins,
            scroll_entities,
            collision_detector,
        )
            .chain()
            .run_if(state_is_playing)
            .after(check_pending_state),
    );
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // Kick off the first run immediately.
    {
        let start_game_id = *world
            .resource::<SystemsStore>()
            .get("start_game")
            .expect("start_game not registered");
        world
            .run_system(start_game_id)
            .expect("start_game failed to run");
    }
    world.trigger(GameStateChangedEvent {});
    world.flush();

    // --------------- Main loop ---------------
    for tick in 0..cli.ticks {
        update_world_time(&mut world, dt);

        if cli.jump_every > 0 && tick % cli.jump_every == 0 {
            world.resource_mut::<InputState>().press();
        }

        update.run(&mut world);

        world.resource_mut::<InputState>().clear();
        world.clear_trackers(); // Clear changed components for next tick

        if matches!(world.resource::<GameState>().get(), GameStates::GameOver) {
            break;
        }
    }

    info!("final score: {}", world.resource::<Score>().value);
    for (rank, entry) in world.resource::<HighScores>().entries.iter().enumerate() {
        info!("{}. {} points ({})", rank + 1, entry.score, entry.date);
    }

    shutdown_ledger(&mut world);
}
