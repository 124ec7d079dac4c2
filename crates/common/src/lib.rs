//! Shared value types for the cubeworld demo.

mod types;

pub use types::{BoundingBox2D, MeshHandle, TextureHandle, Vector2D};
