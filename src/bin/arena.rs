//! Arena Demo
//!
//! Top-down sandbox for the look-at controller: the player entity tracks
//! the mouse cursor while a sentry scans its surroundings. Both are drawn
//! with the debug overlay - a white line to the current look target, a
//! colored facing arrow, and a wireframe sphere on the target point.
//!
//! Controls: move the mouse to aim, ESC to exit. Tuning is read from
//! `arena.json` when present.

use std::sync::Arc;
use std::time::Instant;

use glam::Vec3;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use aim_arena_engine::camera::Camera2d;
use aim_arena_engine::controller::{Controller, EntityController, FrameContext};
use aim_arena_engine::debug_draw::{Color, DebugDraw};
use aim_arena_engine::game::{
    default_player_spec, default_sentry_spec, spawn_player, spawn_sentry, GameConfig,
};
use aim_arena_engine::input::{InputState, PointerBindings};
use aim_arena_engine::render::{GpuContext, GpuContextConfig, LineRenderer};
use aim_arena_engine::schedule::FixedTimestep;

/// Config file consulted at startup.
const CONFIG_PATH: &str = "arena.json";

/// Window size at startup.
const WINDOW_SIZE: (u32, u32) = (1280, 720);

/// Background color behind the overlay.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.015,
    g: 0.02,
    b: 0.04,
    a: 1.0,
};

/// Length of the facing arrow in world units.
const FACING_ARROW_LENGTH: f32 = 1.5;

/// Radius of the sphere drawn on the look target.
const TARGET_MARKER_RADIUS: f32 = 0.3;

struct ArenaApp {
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    renderer: Option<LineRenderer>,
    camera: Camera2d,
    input: InputState,
    timestep: FixedTimestep,
    debug: DebugDraw,
    player: EntityController,
    sentry: EntityController,
    last_frame: Instant,
    frame_count: u32,
    last_fps_update: Instant,
}

impl ArenaApp {
    fn new(config: &GameConfig, player: EntityController, sentry: EntityController) -> Self {
        Self {
            window: None,
            gpu: None,
            renderer: None,
            camera: Camera2d::new(
                Vec3::ZERO,
                config.view_height,
                WINDOW_SIZE.0,
                WINDOW_SIZE.1,
            ),
            input: InputState::new(),
            timestep: FixedTimestep::new(config.fixed_dt),
            debug: DebugDraw::new(),
            player,
            sentry,
            last_frame: Instant::now(),
            frame_count: 0,
            last_fps_update: Instant::now(),
        }
    }

    fn initialize(&mut self, window: Arc<Window>) {
        let gpu = GpuContext::new(Arc::clone(&window), GpuContextConfig::default());
        let renderer = LineRenderer::new(&gpu);
        let (width, height) = gpu.dimensions();
        self.camera.set_viewport(width, height);

        log::info!("renderer ready ({}x{}, {:?})", width, height, gpu.format());

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.renderer = Some(renderer);
    }

    fn update(&mut self, dt: f32) {
        let ctx = FrameContext {
            camera: &self.camera,
            input: &self.input,
            dt,
        };
        self.player.on_frame(&ctx);
        self.sentry.on_frame(&ctx);

        let steps = self.timestep.advance(dt);
        for _ in 0..steps {
            self.player.on_fixed_tick(self.timestep.step());
            self.sentry.on_fixed_tick(self.timestep.step());
        }

        self.draw_overlay();
    }

    fn draw_overlay(&mut self) {
        self.debug.begin_frame();

        for (controller, arrow_color) in [
            (&self.player, Color::GREEN),
            (&self.sentry, Color::YELLOW),
        ] {
            let position = controller.position();
            let target = controller.look_target();

            self.debug.line(position, target, Color::default());
            self.debug.sphere(target, TARGET_MARKER_RADIUS, Color::BLUE);

            let facing = controller.body_orientation().to_radians();
            let direction = Vec3::new(facing.cos(), facing.sin(), 0.0);
            self.debug
                .arrow(position, position + direction * FACING_ARROW_LENGTH, arrow_color);
        }
    }

    fn render(&mut self) {
        let (Some(gpu), Some(renderer)) = (&self.gpu, &mut self.renderer) else {
            return;
        };

        let output = match gpu.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.reconfigure();
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, skipping frame");
                return;
            }
            Err(err) => {
                log::warn!("dropped frame: {err}");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        renderer.prepare(gpu, self.camera.view_projection(), self.debug.vertices());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Arena Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Arena Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            renderer.render(&mut render_pass);
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }

    fn update_title(&mut self, now: Instant) {
        self.frame_count += 1;
        let elapsed = now.duration_since(self.last_fps_update).as_secs_f32();
        if elapsed >= 1.0 {
            let fps = self.frame_count as f32 / elapsed;
            self.frame_count = 0;
            self.last_fps_update = now;
            if let Some(window) = &self.window {
                window.set_title(&format!("Aim Arena | FPS: {:.0}", fps));
            }
        }
    }
}

impl ApplicationHandler for ArenaApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = WindowAttributes::default()
                .with_title("Aim Arena")
                .with_inner_size(PhysicalSize::new(WINDOW_SIZE.0, WINDOW_SIZE.1));
            let window = Arc::new(event_loop.create_window(attrs).unwrap());
            self.initialize(window);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(KeyCode::Escape) = event.physical_key {
                    if event.state == ElementState::Pressed {
                        event_loop.exit();
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input
                    .handle_cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorEntered { .. } => self.input.handle_cursor_entered(),
            WindowEvent::CursorLeft { .. } => self.input.handle_cursor_left(),
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size.width, new_size.height);
                }
                self.camera.set_viewport(new_size.width, new_size.height);
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let delta_time = now.duration_since(self.last_frame).as_secs_f32();
                self.last_frame = now;

                self.update_title(now);
                self.update(delta_time);
                self.render();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::load_or_default(CONFIG_PATH);
    let bindings = PointerBindings::new();

    let player = match spawn_player(&default_player_spec(), &bindings, &config) {
        Ok(player) => player,
        Err(err) => {
            log::error!("failed to spawn player: {err}");
            std::process::exit(1);
        }
    };
    let sentry = match spawn_sentry(&default_sentry_spec(&config), &config) {
        Ok(sentry) => sentry,
        Err(err) => {
            log::error!("failed to spawn sentry: {err}");
            std::process::exit(1);
        }
    };

    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ArenaApp::new(&config, player, sentry);
    event_loop.run_app(&mut app).unwrap();
}
