use cubeworld_common::{MeshHandle, TextureHandle, Vector2D};
use serde::{Deserialize, Serialize};

/// Per-frame velocity multiplier. Applied once per step regardless of `dt`.
pub const DAMPING: f32 = 0.85;

/// The player-controlled sprite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vector2D,
    pub velocity: Vector2D,
    /// Impulses accumulated for the current frame; cleared by [`Player::step`].
    pub acceleration: Vector2D,
    pub mesh: MeshHandle,
    pub texture: TextureHandle,
}

impl Player {
    /// A player at rest at the origin.
    pub fn new(mesh: MeshHandle, texture: TextureHandle) -> Self {
        Self {
            position: Vector2D::ZERO,
            velocity: Vector2D::ZERO,
            acceleration: Vector2D::ZERO,
            mesh,
            texture,
        }
    }

    /// Add an impulse to this frame's acceleration.
    pub fn push(&mut self, impulse: Vector2D) {
        self.acceleration = self.acceleration.add(impulse);
    }

    /// Semi-implicit Euler step followed by frame-rate dependent damping.
    ///
    /// `dt` is not clamped here; large values make the integration unstable.
    pub fn step(&mut self, dt: f32) {
        self.velocity = self.velocity.add(self.acceleration.mul_scalar(dt));
        self.position = self.position.add(self.velocity.mul_scalar(dt));
        self.velocity = self.velocity.mul_scalar(DAMPING);
        self.acceleration = Vector2D::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn player() -> Player {
        Player::new(MeshHandle(0), TextureHandle(0))
    }

    fn assert_close(a: Vector2D, b: Vector2D) {
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn zero_acceleration_damps_velocity() {
        let mut p = player();
        p.velocity = Vector2D::new(2.0, -4.0);
        p.step(0.0);
        assert_eq!(p.position, Vector2D::ZERO);
        assert_eq!(p.velocity, Vector2D::new(2.0 * DAMPING, -4.0 * DAMPING));
    }

    #[test]
    fn at_rest_stays_at_rest() {
        let mut p = player();
        p.position = Vector2D::new(3.0, -7.0);
        for dt in [0.0, 1.0 / 60.0, 1.0 / 30.0, 0.5] {
            p.step(dt);
            assert_eq!(p.position, Vector2D::new(3.0, -7.0));
            assert_eq!(p.velocity, Vector2D::ZERO);
        }
    }

    #[test]
    fn step_matches_closed_form() {
        let v = Vector2D::new(1.5, -0.5);
        let a = Vector2D::new(-20.0, 40.0);
        let x = Vector2D::new(10.0, 10.0);
        for dt in [1.0 / 60.0, 1.0 / 30.0, 0.1] {
            let mut p = player();
            p.position = x;
            p.velocity = v;
            p.acceleration = a;
            p.step(dt);

            let integrated = v.add(a.mul_scalar(dt));
            assert_close(p.velocity, integrated.mul_scalar(DAMPING));
            assert_close(p.position, x.add(integrated.mul_scalar(dt)));
        }
    }

    #[test]
    fn step_clears_acceleration() {
        let mut p = player();
        p.push(Vector2D::new(0.0, 100.0));
        p.push(Vector2D::new(100.0, 0.0));
        assert_eq!(p.acceleration, Vector2D::new(100.0, 100.0));
        p.step(1.0 / 60.0);
        assert_eq!(p.acceleration, Vector2D::ZERO);
    }
}
