use crate::scene::Scene;
use std::fmt::Write;

/// Renderer-agnostic interface. All renderers consume a [`Scene`].
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&mut self, scene: &Scene) -> Self::Output;
}

/// Text renderer for logs and tests.
///
/// Produces one line for the camera and one per draw call, in draw order.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    frames: u64,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&mut self, scene: &Scene) -> String {
        self.frames += 1;
        let mut out = String::new();
        let v = &scene.view;
        let _ = writeln!(
            out,
            "=== Frame {} ({} draws) ===",
            self.frames,
            scene.draws.len()
        );
        let _ = writeln!(
            out,
            "Camera: eye=({:.2}, {:.2}, {:.2}) target=({:.2}, {:.2}, {:.2})",
            v.eye.x, v.eye.y, v.eye.z, v.target.x, v.target.y, v.target.z
        );
        for draw in &scene.draws {
            let p = draw.position();
            let _ = writeln!(
                out,
                "  mesh={} tex={} pos=({:.2}, {:.2})",
                draw.mesh.0, draw.texture.0, p.x, p.y
            );
        }
        out
    }
}
