use cubeworld_common::Vector2D;
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Height of the eye above the XY plane.
pub const CAMERA_HEIGHT: f32 = 25.0;

/// Fraction of the remaining distance covered per second of `dt`.
pub const FOLLOW_RATE: f32 = 3.0;

/// Top-down camera that eases toward a target on the XY plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowCamera {
    pub position: Vector2D,
    pub z_value: f32,
    /// Last target handed to [`FollowCamera::step`].
    pub target: Vector2D,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            position: Vector2D::ZERO,
            z_value: CAMERA_HEIGHT,
            target: Vector2D::ZERO,
        }
    }
}

impl FollowCamera {
    /// Move toward `target` by `min(dt * FOLLOW_RATE, 1)` of the gap.
    ///
    /// At `dt >= 1 / FOLLOW_RATE` the camera lands exactly on the target.
    pub fn step(&mut self, dt: f32, target: Vector2D) {
        self.target = target;
        let t = (dt * FOLLOW_RATE).min(1.0);
        if t >= 1.0 {
            self.position = target;
            return;
        }
        let gap = self.target.subtract(self.position);
        self.position = self.position.add(gap.mul_scalar(t));
    }

    pub fn eye(&self) -> Vec3 {
        self.position.extend(self.z_value)
    }

    /// Point on the ground plane directly below the eye.
    pub fn look_at(&self) -> Vec3 {
        self.position.extend(0.0)
    }

    pub fn up(&self) -> Vec3 {
        Vec3::Y
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.look_at(), self.up())
    }
}
