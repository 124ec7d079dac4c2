use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

const fn v(x: f32, y: f32, z: f32, u: f32, w: f32) -> Vertex {
    Vertex {
        position: [x, y, z],
        uv: [u, w],
    }
}

/// Vertices in a cube mesh: 6 faces, 2 triangles each.
pub const CUBE_VERTEX_COUNT: u32 = 6 * 2 * 3;

/// Non-indexed cube spanning -1..1 on every axis.
#[rustfmt::skip]
pub const CUBE_VERTICES: [Vertex; CUBE_VERTEX_COUNT as usize] = [
    // Bottom
    v(-1.0, -1.0, -1.0, 0.0, 0.0),
    v( 1.0, -1.0, -1.0, 1.0, 0.0),
    v(-1.0, -1.0,  1.0, 0.0, 1.0),
    v( 1.0, -1.0, -1.0, 1.0, 0.0),
    v( 1.0, -1.0,  1.0, 1.0, 1.0),
    v(-1.0, -1.0,  1.0, 0.0, 1.0),
    // Top
    v(-1.0,  1.0, -1.0, 0.0, 0.0),
    v(-1.0,  1.0,  1.0, 0.0, 1.0),
    v( 1.0,  1.0, -1.0, 1.0, 0.0),
    v( 1.0,  1.0, -1.0, 1.0, 0.0),
    v(-1.0,  1.0,  1.0, 0.0, 1.0),
    v( 1.0,  1.0,  1.0, 1.0, 1.0),
    // Front
    v(-1.0, -1.0,  1.0, 1.0, 0.0),
    v( 1.0, -1.0,  1.0, 0.0, 0.0),
    v(-1.0,  1.0,  1.0, 1.0, 1.0),
    v( 1.0, -1.0,  1.0, 0.0, 0.0),
    v( 1.0,  1.0,  1.0, 0.0, 1.0),
    v(-1.0,  1.0,  1.0, 1.0, 1.0),
    // Back
    v(-1.0, -1.0, -1.0, 0.0, 0.0),
    v(-1.0,  1.0, -1.0, 0.0, 1.0),
    v( 1.0, -1.0, -1.0, 1.0, 0.0),
    v( 1.0, -1.0, -1.0, 1.0, 0.0),
    v(-1.0,  1.0, -1.0, 0.0, 1.0),
    v( 1.0,  1.0, -1.0, 1.0, 1.0),
    // Left
    v(-1.0, -1.0,  1.0, 0.0, 1.0),
    v(-1.0,  1.0, -1.0, 1.0, 0.0),
    v(-1.0, -1.0, -1.0, 0.0, 0.0),
    v(-1.0, -1.0,  1.0, 0.0, 1.0),
    v(-1.0,  1.0,  1.0, 1.0, 1.0),
    v(-1.0,  1.0, -1.0, 1.0, 0.0),
    // Right
    v( 1.0, -1.0,  1.0, 1.0, 1.0),
    v( 1.0, -1.0, -1.0, 1.0, 0.0),
    v( 1.0,  1.0, -1.0, 0.0, 0.0),
    v( 1.0, -1.0,  1.0, 1.0, 1.0),
    v( 1.0,  1.0, -1.0, 0.0, 0.0),
    v( 1.0,  1.0,  1.0, 0.0, 1.0),
];
