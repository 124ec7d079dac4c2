use cubeworld_common::{BoundingBox2D, MeshHandle, TextureHandle, Vector2D};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Generation indices for the static blocks.
pub const BLOCK_INDICES: Range<i32> = -10..10;

/// A block placed once at map creation and never moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticMapEntity {
    /// Generation index the block was placed from.
    pub index: i32,
    pub position: Vector2D,
    pub bounds: BoundingBox2D,
    pub texture: TextureHandle,
}

/// The static level: blocks sharing one cube mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Map {
    /// Accumulated time. Nothing reads it yet.
    pub angle: f32,
    entities: Vec<StaticMapEntity>,
    mesh: MeshHandle,
}

impl Map {
    pub fn empty(mesh: MeshHandle) -> Self {
        Self {
            angle: 0.0,
            entities: Vec::new(),
            mesh,
        }
    }

    /// Scatter one block per index in [`BLOCK_INDICES`].
    ///
    /// Block `i` sits at `(i * r1, i * r2)` with `r1` and `r2` drawn
    /// independently from `[0, 1)`. Every block shares `texture`.
    pub fn generate<R: Rng>(mesh: MeshHandle, texture: TextureHandle, rng: &mut R) -> Self {
        let mut map = Self::empty(mesh);
        for i in BLOCK_INDICES {
            let r1: f32 = rng.gen_range(0.0..1.0);
            let r2: f32 = rng.gen_range(0.0..1.0);
            map.push(StaticMapEntity {
                index: i,
                position: Vector2D::new(i as f32 * r1, i as f32 * r2),
                bounds: BoundingBox2D::from_xy(0.0, 2.0, 0.0, 2.0),
                texture,
            });
        }
        tracing::debug!(blocks = map.entities.len(), "map generated");
        map
    }

    pub fn push(&mut self, entity: StaticMapEntity) {
        self.entities.push(entity);
    }

    pub fn entities(&self) -> &[StaticMapEntity] {
        &self.entities
    }

    pub fn mesh(&self) -> MeshHandle {
        self.mesh
    }

    pub fn step(&mut self, dt: f32) {
        self.angle += dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    fn generate(seed: u64) -> Map {
        let mut rng = StdRng::seed_from_u64(seed);
        Map::generate(MeshHandle(1), TextureHandle(7), &mut rng)
    }

    #[test]
    fn generates_twenty_blocks() {
        let map = generate(42);
        assert_eq!(map.entities().len(), 20);
        let indices: BTreeSet<i32> = map.entities().iter().map(|e| e.index).collect();
        assert_eq!(indices, (-10..10).collect::<BTreeSet<_>>());
    }

    #[test]
    fn blocks_share_box_texture_and_mesh() {
        let map = generate(1);
        let bb = BoundingBox2D::from_xy(0.0, 2.0, 0.0, 2.0);
        for e in map.entities() {
            assert_eq!(e.bounds, bb);
            assert_eq!(e.texture, TextureHandle(7));
        }
        assert_eq!(map.mesh(), MeshHandle(1));
    }

    #[test]
    fn positions_scale_with_index() {
        let map = generate(9);
        for e in map.entities() {
            let i = e.index as f32;
            assert!(e.position.x.abs() <= i.abs());
            assert!(e.position.y.abs() <= i.abs());
            // Both coordinates share the index's sign (or are zero).
            assert!(e.position.x * i >= 0.0);
            assert!(e.position.y * i >= 0.0);
        }
        let origin = map.entities().iter().find(|e| e.index == 0).unwrap();
        assert_eq!(origin.position, Vector2D::ZERO);
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(generate(5), generate(5));
        assert_ne!(generate(5), generate(6));
    }

    #[test]
    fn coordinates_drawn_independently() {
        let map = generate(3);
        let differing = map
            .entities()
            .iter()
            .filter(|e| e.index != 0 && e.position.x != e.position.y)
            .count();
        assert!(differing > 0);
    }

    #[test]
    fn step_accumulates_angle() {
        let mut map = Map::empty(MeshHandle(0));
        map.step(0.25);
        map.step(0.5);
        assert_eq!(map.angle, 0.75);
    }
}
