//! wgpu render backend for cubeworld.
//!
//! Draws textured cubes from a [`cubeworld_render::Scene`] under a
//! perspective projection and the follow camera's view.
//!
//! # Invariants
//! - Renderer never mutates simulation state.
//! - Meshes and textures are uploaded once; draws refer to them by handle.
//! - Shader and pipeline validation failures surface as [`RenderError`].

mod gpu;
mod mesh;
mod shaders;

pub use gpu::{RenderError, WgpuRenderer, compile_shader};
pub use mesh::{CUBE_VERTEX_COUNT, CUBE_VERTICES, Vertex};
