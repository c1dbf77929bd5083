//! ECS resources that bridge the main thread with the persistence thread.
//!
//! Use [`setup_ledger`] once during initialization to load the stored high
//! scores, spawn the persistence thread, and insert the [`LedgerBridge`] and
//! [`HighScores`] resources. Call [`shutdown_ledger`] during teardown to
//! drain pending writes and join the thread.
//!
//! Persistence is fire-and-forget: commits are sent over an unbounded
//! channel and never block the tick. Failures on the worker side are logged
//! and swallowed so gameplay is never blocked by storage issues.

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use crossbeam_channel::{Sender, unbounded};
use log::warn;

use crate::resources::highscores::{HighScores, ScoreEntry, read_entries};
use crate::systems::ledger::ledger_thread;

/// Command sent to the persistence thread.
#[derive(Debug, Clone)]
pub enum LedgerCmd {
    /// Persist the full entry sequence, replacing prior file contents.
    Save(Vec<ScoreEntry>),
    /// Persist an empty ledger.
    Clear,
    /// Stop the thread.
    Shutdown,
}

/// Shared bridge between the ECS world and the persistence thread.
///
/// This resource is created by [`setup_ledger`]. Systems send commands via
/// [`LedgerBridge::tx`]; nothing flows back.
#[derive(Resource)]
pub struct LedgerBridge {
    /// Sender for [`LedgerCmd`] messages (ECS -> persistence thread).
    pub tx: Sender<LedgerCmd>,
    /// Join handle for the background persistence thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Load the stored ledger, spawn the persistence thread, and register the
/// bridge resources.
///
/// An absent or corrupt file yields an empty ledger with a warning; startup
/// never fails on storage problems.
pub fn setup_ledger(world: &mut World, path: impl Into<PathBuf>) {
    let path = path.into();

    let entries = if path.exists() {
        match read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("high score ledger unreadable, starting empty: {e}");
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };
    world.insert_resource(HighScores::from_entries(entries));

    let (tx, rx) = unbounded::<LedgerCmd>();
    let handle = std::thread::spawn(move || ledger_thread(rx, path));
    world.insert_resource(LedgerBridge { tx, handle });
}

/// Gracefully request shutdown of the persistence thread and join it.
///
/// Commands already queued (including a final save) are processed before the
/// thread exits.
pub fn shutdown_ledger(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<LedgerBridge>() {
        let _ = bridge.tx.send(LedgerCmd::Shutdown);
        let _ = bridge.handle.join();
    }
}
