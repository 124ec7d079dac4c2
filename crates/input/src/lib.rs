//! Directional controls mapped to player acceleration.
//!
//! # Invariants
//! - Held keys contribute an impulse every frame; there is no repeat or debounce.
//! - Simultaneous directions add up without normalization.

pub mod action;

pub use action::{ACCEL_IMPULSE, ControlState, Direction};
