//! Rendering Adapter: renderer-agnostic scene description.
//!
//! # Invariants
//! - Renderers never mutate simulation state.
//! - A [`Scene`] lists the map's blocks first, then the player.

mod renderer;
mod scene;

pub use renderer::{DebugTextRenderer, Renderer};
pub use scene::{DrawCall, Projection, RenderView, Scene};
