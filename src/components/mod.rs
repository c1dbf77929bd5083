//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the simulation world. Components carry data only; behavior lives in the
//! systems that query them.
//!
//! Submodules overview:
//! - [`coin`] – collectible coin marker and its fixed dimensions
//! - [`mapposition`] – world-space position for an entity
//! - [`obstacle`] – lethal obstacle marker and its fixed dimensions
//! - [`persistent`] – marker for entities that survive run resets
//! - [`player`] – vertical velocity and jump budget of the runner
//! - [`scrolling`] – shared scroll-and-retire behavior for moving entities

pub mod coin;
pub mod mapposition;
pub mod obstacle;
pub mod persistent;
pub mod player;
pub mod scrolling;
