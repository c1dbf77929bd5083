//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, run state,
//! scoring, and the persistence bridge. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `gameconfig` – startup configuration loaded from an INI file
//! - `gamestate` – authoritative and pending high-level run state
//! - `highscores` – in-memory ranked ledger of best historical scores
//! - `input` – per-tick activation (jump) events fed by the driver
//! - `ledger` – bridge and channel for the background persistence thread
//! - `playfield` – fixed playfield dimensions injected at startup
//! - `score` – current run score counter
//! - `spawntimer` – edge-triggered spawn timers for obstacles and coins
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `worldtime` – simulation time and delta

pub mod gameconfig;
pub mod gamestate;
pub mod highscores;
pub mod input;
pub mod ledger;
pub mod playfield;
pub mod score;
pub mod spawntimer;
pub mod systemsstore;
pub mod worldtime;
