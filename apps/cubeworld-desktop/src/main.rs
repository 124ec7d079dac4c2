mod bootstrap;
mod frame;

use anyhow::{Context, Result};
use cubeworld_input::ControlState;
use cubeworld_kernel::Simulation;
use cubeworld_render::Projection;
use cubeworld_render_wgpu::WgpuRenderer;
use frame::FrameLoop;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;
const WINDOW_TITLE: &str = "Game";

struct GpuApp {
    sim: Option<Simulation>,
    controls: ControlState,
    frames: FrameLoop,
    projection: Projection,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<WgpuRenderer>,
    startup_error: Option<anyhow::Error>,
}

impl GpuApp {
    fn new() -> Self {
        Self {
            sim: None,
            controls: ControlState::new(),
            frames: FrameLoop::new(Instant::now()),
            projection: Projection::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
            startup_error: None,
        }
    }

    /// Window, GPU context, shader, meshes, texture, initial state.
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no suitable GPU adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("cubeworld_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("failed to create device")?;

        let info = adapter.get_info();
        tracing::info!(
            "GPU initialized: {} ({} backend)",
            info.name,
            info.backend.to_str()
        );

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .context("surface reports no texture formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        self.projection = Projection::new(config.width, config.height);

        let mut renderer = WgpuRenderer::new(&device, surface_format, config.width, config.height)?;

        let assets = bootstrap::locate_assets()?;
        let image = assets
            .load_image(bootstrap::TEXTURE_NAME)
            .with_context(|| format!("could not load texture {}", bootstrap::TEXTURE_NAME))?;
        let texture = renderer.upload_texture(&device, &queue, &image)?;
        let player_mesh = renderer.upload_cube(&device);
        let map_mesh = renderer.upload_cube(&device);

        let sim = bootstrap::build_simulation(
            player_mesh,
            map_mesh,
            texture,
            &mut rand::thread_rng(),
        );
        tracing::info!(blocks = sim.map.entities().len(), "simulation ready");

        self.sim = Some(sim);
        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);
        self.frames = FrameLoop::new(Instant::now());
        Ok(())
    }

    /// Release GPU resources before the window goes away.
    fn teardown(&mut self) {
        self.renderer = None;
        self.surface = None;
        self.queue = None;
        self.device = None;
        self.window = None;
        if let Some(sim) = &self.sim {
            tracing::info!(
                frames = sim.frame(),
                state_hash = %format!("{:016x}", sim.state_hash()),
                "final simulation state"
            );
        }
        tracing::info!(state = ?self.frames.state(), "teardown complete");
    }

    fn redraw(&mut self) {
        let (Some(sim), Some(surface), Some(device), Some(queue), Some(renderer)) = (
            self.sim.as_mut(),
            self.surface.as_ref(),
            self.device.as_ref(),
            self.queue.as_ref(),
            self.renderer.as_ref(),
        ) else {
            return;
        };
        let config = self.config.as_ref();

        self.frames.run_frame(
            sim,
            self.projection,
            &self.controls,
            Instant::now(),
            |scene| {
                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };
                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());
                renderer.render(device, queue, &view, scene);
                output.present();
            },
        );
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || !self.frames.is_running() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            tracing::error!("startup failed: {e:#}");
            self.startup_error = Some(e);
            self.frames.request_close();
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                if self.frames.request_close() {
                    tracing::info!("close requested");
                    self.teardown();
                }
                event_loop.exit();
            }
            WindowEvent::Focused(false) => {
                tracing::debug!("focus lost, releasing held keys");
                self.controls.release_all();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                if let Some(direction) = bootstrap::direction_for(key) {
                    self.controls
                        .set(direction, key_state == ElementState::Pressed);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("cubeworld-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new();
    event_loop.run_app(&mut app)?;

    if let Some(err) = app.startup_error.take() {
        return Err(err);
    }
    Ok(())
}
