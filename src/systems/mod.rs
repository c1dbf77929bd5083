//! Simulation systems.
//!
//! This module groups all ECS systems that advance the simulation, plus the
//! background persistence worker.
//!
//! Submodules overview
//! - [`collision`] – player-vs-obstacle and player-vs-coin overlap checks
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`ledger`] – background thread persisting the high-score ledger
//! - [`physics`] – vertical jump/gravity kinematics and floor/ceiling checks
//! - [`scroll`] – move scrolling entities leftward and retire them off-screen
//! - [`spawn`] – periodic obstacle and coin spawning at the right edge
//! - [`time`] – update simulation time and delta

pub mod collision;
pub mod gamestate;
pub mod ledger;
pub mod physics;
pub mod scroll;
pub mod spawn;
pub mod time;
