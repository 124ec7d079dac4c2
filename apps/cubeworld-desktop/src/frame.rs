use cubeworld_input::ControlState;
use cubeworld_kernel::Simulation;
use cubeworld_render::{Projection, Scene};
use std::time::Instant;

/// Longest step handed to the simulation. The physics step does not clamp
/// `dt` itself, so a stalled frame (window drag, debugger) is capped here.
///
/// Below the camera's snap threshold (`dt >= 1/3`), so in the running app
/// the camera always interpolates and never snaps onto the player. Time lost
/// to a capped frame is not replayed: `Map::angle` falls behind wall-clock
/// time after a stall.
pub const MAX_FRAME_DT: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Terminal. No further frames run.
    Closing,
}

/// Per-frame ordering and timing for the main loop.
#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    previous: Instant,
}

impl FrameLoop {
    pub fn new(start: Instant) -> Self {
        Self {
            state: LoopState::Running,
            previous: start,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Move to `Closing`. Returns true only on the transition itself.
    pub fn request_close(&mut self) -> bool {
        let was_running = self.is_running();
        self.state = LoopState::Closing;
        was_running
    }

    /// Run one iteration: time, draw the pre-step state, read controls, step.
    ///
    /// `draw` receives the scene built before any input of this frame is
    /// applied, so what is shown lags the controls by one frame. Returns the
    /// `dt` that was stepped, or `None` once closing.
    pub fn run_frame<F>(
        &mut self,
        sim: &mut Simulation,
        projection: Projection,
        controls: &ControlState,
        now: Instant,
        draw: F,
    ) -> Option<f32>
    where
        F: FnOnce(&Scene),
    {
        if !self.is_running() {
            return None;
        }

        let elapsed = now.saturating_duration_since(self.previous).as_secs_f32();
        self.previous = now;
        let dt = elapsed.min(MAX_FRAME_DT);

        let scene = Scene::capture(sim, projection);
        draw(&scene);

        sim.apply_acceleration(controls.acceleration());
        sim.step(dt);
        Some(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeworld_common::{MeshHandle, TextureHandle, Vector2D};
    use cubeworld_input::Direction;
    use cubeworld_kernel::{FollowCamera, Map, Player};
    use cubeworld_render::{DebugTextRenderer, Renderer};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    fn sim() -> Simulation {
        let mut rng = StdRng::seed_from_u64(0);
        Simulation::new(
            Player::new(MeshHandle(0), TextureHandle(0)),
            FollowCamera::default(),
            Map::generate(MeshHandle(1), TextureHandle(0), &mut rng),
        )
    }

    fn held(direction: Direction) -> ControlState {
        let mut c = ControlState::new();
        c.set(direction, true);
        c
    }

    #[test]
    fn draws_pre_step_state() {
        let start = Instant::now();
        let mut frames = FrameLoop::new(start);
        let mut s = sim();
        let mut drawn = None;

        let dt = frames
            .run_frame(
                &mut s,
                Projection::default(),
                &held(Direction::Up),
                start + Duration::from_millis(16),
                |scene| drawn = scene.draws.last().map(|d| d.position()),
            )
            .unwrap();

        assert!((dt - 0.016).abs() < 1e-6);
        assert_eq!(drawn, Some(glam::Vec3::ZERO));
        assert!(s.player.position.y > 0.0);
        assert_eq!(s.player.position.x, 0.0);
        assert_eq!(s.frame(), 1);
    }

    #[test]
    fn elapsed_is_measured_between_frames() {
        let start = Instant::now();
        let mut frames = FrameLoop::new(start);
        let mut s = sim();
        let idle = ControlState::new();
        let t1 = start + Duration::from_millis(20);
        let t2 = t1 + Duration::from_millis(30);

        let dt1 = frames.run_frame(&mut s, Projection::default(), &idle, t1, |_| {});
        let dt2 = frames.run_frame(&mut s, Projection::default(), &idle, t2, |_| {});
        assert!((dt1.unwrap() - 0.020).abs() < 1e-6);
        assert!((dt2.unwrap() - 0.030).abs() < 1e-6);
        assert!((s.map.angle - 0.050).abs() < 1e-6);
    }

    #[test]
    fn long_frames_are_capped() {
        let start = Instant::now();
        let mut frames = FrameLoop::new(start);
        let mut s = sim();
        let dt = frames.run_frame(
            &mut s,
            Projection::default(),
            &ControlState::new(),
            start + Duration::from_secs(3),
            |_| {},
        );
        assert_eq!(dt, Some(MAX_FRAME_DT));
        assert!((s.map.angle - MAX_FRAME_DT).abs() < 1e-6);
    }

    #[test]
    fn stalled_frame_does_not_snap_camera() {
        let start = Instant::now();
        let mut frames = FrameLoop::new(start);
        let mut s = sim();
        frames.run_frame(
            &mut s,
            Projection::default(),
            &held(Direction::Right),
            start + Duration::from_secs(2),
            |_| {},
        );

        let target = s.player.position;
        assert!(target.x > 0.0);
        assert_ne!(s.camera.position, target);
        let expected = target.x * MAX_FRAME_DT * 3.0;
        assert!((s.camera.position.x - expected).abs() < 1e-5);
    }

    #[test]
    fn closing_is_terminal() {
        let start = Instant::now();
        let mut frames = FrameLoop::new(start);
        let mut s = sim();
        assert!(frames.request_close());
        assert!(!frames.request_close());
        assert_eq!(frames.state(), LoopState::Closing);

        let mut called = false;
        let dt = frames.run_frame(
            &mut s,
            Projection::default(),
            &held(Direction::Right),
            start + Duration::from_millis(16),
            |_| called = true,
        );
        assert_eq!(dt, None);
        assert!(!called);
        assert_eq!(s.frame(), 0);
    }

    #[test]
    fn debug_render_lags_input_by_one_frame() {
        let start = Instant::now();
        let mut frames = FrameLoop::new(start);
        let mut s = sim();
        let mut renderer = DebugTextRenderer::new();
        let mut outputs = Vec::new();
        let controls = held(Direction::Right);

        for i in 1..=2 {
            frames.run_frame(
                &mut s,
                Projection::default(),
                &controls,
                start + Duration::from_millis(16 * i),
                |scene| outputs.push(renderer.render(scene)),
            );
        }

        // The player is the last line of each frame.
        let player_line = |out: &String| out.lines().last().unwrap().to_string();
        assert!(player_line(&outputs[0]).contains("pos=(0.00, 0.00)"));
        assert!(!player_line(&outputs[1]).contains("pos=(0.00, 0.00)"));
        assert!(s.player.position.x > 0.0);
        assert_eq!(s.player.position.y, 0.0);
        assert_ne!(s.player.position, Vector2D::ZERO);
    }
}
