//! Background persistence worker for the high-score ledger.
//!
//! Runs on its own thread, receiving [`LedgerCmd`] messages from the bridge
//! in [`crate::resources::ledger`]. Every write replaces the file with the
//! full snapshot it was handed. Storage failures are logged and swallowed;
//! the simulation never learns about them.

use std::path::PathBuf;

use crossbeam_channel::Receiver;
use log::{error, info};

use crate::resources::highscores::write_entries;
use crate::resources::ledger::LedgerCmd;

/// Thread body: process ledger commands until shutdown.
pub fn ledger_thread(rx: Receiver<LedgerCmd>, path: PathBuf) {
    while let Ok(cmd) = rx.recv() {
        match cmd {
            LedgerCmd::Save(entries) => {
                if let Err(e) = write_entries(&path, &entries) {
                    error!("high score save failed: {e}");
                }
            }
            LedgerCmd::Clear => match write_entries(&path, &[]) {
                Ok(()) => info!("high scores cleared"),
                Err(e) => error!("high score clear failed: {e}"),
            },
            LedgerCmd::Shutdown => break,
        }
    }
}
