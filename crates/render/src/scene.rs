use cubeworld_common::{MeshHandle, TextureHandle, Vector2D};
use cubeworld_kernel::{FollowCamera, Simulation};
use glam::{Mat4, Vec3};

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            aspect: width as f32 / height.max(1) as f32,
            ..Self::default()
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            aspect: 800.0 / 600.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Camera placement for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderView {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl RenderView {
    pub fn from_camera(camera: &FollowCamera) -> Self {
        Self {
            eye: camera.eye(),
            target: camera.look_at(),
            up: camera.up(),
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// One cube to draw: which vertex buffer, which texture, where.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub mesh: MeshHandle,
    pub texture: TextureHandle,
    pub model: Mat4,
}

impl DrawCall {
    fn at(mesh: MeshHandle, texture: TextureHandle, position: Vector2D) -> Self {
        Self {
            mesh,
            texture,
            model: Mat4::from_translation(position.extend(0.0)),
        }
    }

    /// Translation part of the model matrix.
    pub fn position(&self) -> Vec3 {
        self.model.w_axis.truncate()
    }
}

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub projection: Projection,
    pub view: RenderView,
    pub draws: Vec<DrawCall>,
}

impl Scene {
    /// Snapshot the simulation as it stands now.
    pub fn capture(sim: &Simulation, projection: Projection) -> Self {
        let mesh = sim.map.mesh();
        let mut draws: Vec<DrawCall> = sim
            .map
            .entities()
            .iter()
            .map(|e| DrawCall::at(mesh, e.texture, e.position))
            .collect();
        draws.push(DrawCall::at(
            sim.player.mesh,
            sim.player.texture,
            sim.player.position,
        ));

        Self {
            projection,
            view: RenderView::from_camera(&sim.camera),
            draws,
        }
    }
}
