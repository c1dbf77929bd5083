//! Event types and observers used by the simulation.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events keep the detection
//! systems free of consequences: the detector reports, the observer acts.
//!
//! Submodules:
//! - [`collision`] – lethal-hit and coin-collection notifications
//! - [`gamestate`] – state transition notifications for the run lifecycle

pub mod collision;
pub mod gamestate;
