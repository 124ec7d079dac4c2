use crate::camera::FollowCamera;
use crate::map::Map;
use crate::player::Player;
use cubeworld_common::Vector2D;
use serde::{Deserialize, Serialize};

/// All mutable demo state, owned by the main loop.
///
/// Rendering reads it between steps; only [`Simulation::step`] and
/// [`Simulation::apply_acceleration`] change it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    pub player: Player,
    pub camera: FollowCamera,
    pub map: Map,
    frame: u64,
}

impl Simulation {
    pub fn new(player: Player, camera: FollowCamera, map: Map) -> Self {
        Self {
            player,
            camera,
            map,
            frame: 0,
        }
    }

    /// Number of completed steps.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Queue this frame's control impulses on the player.
    pub fn apply_acceleration(&mut self, impulse: Vector2D) {
        self.player.push(impulse);
    }

    /// Advance player, then camera, then map by `dt` seconds.
    ///
    /// The camera follows the player's post-step position.
    pub fn step(&mut self, dt: f32) {
        self.player.step(dt);
        self.camera.step(dt, self.player.position);
        self.map.step(dt);
        self.frame += 1;
    }

    /// FNV-1a hash over the moving state, for comparing replays.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        let mut mix = |bytes: &[u8]| {
            for &b in bytes {
                h ^= b as u64;
                h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&self.frame.to_le_bytes());
        for v in [
            self.player.position,
            self.player.velocity,
            self.player.acceleration,
            self.camera.position,
        ] {
            mix(&v.x.to_le_bytes());
            mix(&v.y.to_le_bytes());
        }
        mix(&self.map.angle.to_le_bytes());
        for e in self.map.entities() {
            mix(&e.index.to_le_bytes());
            mix(&e.position.x.to_le_bytes());
            mix(&e.position.y.to_le_bytes());
        }
        h
    }
}
