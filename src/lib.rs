//! Pixel Runner simulation core.
//!
//! This module exposes the simulation's ECS components, resources, systems,
//! and events for use in integration tests and by an external engine or
//! display layer.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
