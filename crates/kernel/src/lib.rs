//! Simulation kernel: player physics, camera follow, static map.
//!
//! # Invariants
//! - Step functions are pure with respect to `dt` and queued impulses.
//! - State is owned by a [`Simulation`] value, never by globals.
//! - The map's block list is filled once and only read afterwards.

pub mod camera;
pub mod map;
pub mod player;
pub mod simulation;

pub use camera::FollowCamera;
pub use map::{Map, StaticMapEntity};
pub use player::Player;
pub use simulation::Simulation;
