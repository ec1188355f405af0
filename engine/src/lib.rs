//! Aim Arena Engine Library
//!
//! A small top-down game engine built around a look-at controller: entities
//! sample a world-space look target from a pluggable provider each frame
//! and rotate toward it at a bounded angular rate on the fixed tick.
//!
//! # Modules
//!
//! - [`controller`] - Rotation smoothing, look-target providers, entity lifecycle
//! - [`camera`] - Top-down orthographic camera and screen-to-world projection
//! - [`input`] - Platform-agnostic pointer input and named action bindings
//! - [`debug_draw`] - One-frame line/arrow/sphere diagnostics
//! - [`render`] - wgpu line renderer for the debug overlay
//! - [`schedule`] - Fixed-timestep accumulator
//!
//! # Example
//!
//! ```ignore
//! use aim_arena_engine::camera::Camera2d;
//! use aim_arena_engine::controller::{Body, Controller, CursorLook, EntityController, FrameContext};
//! use aim_arena_engine::input::{InputState, PointerBindings, LOOK_ACTION};
//! use aim_arena_engine::schedule::FixedTimestep;
//! use glam::Vec3;
//!
//! let bindings = PointerBindings::new();
//! let look = bindings.resolve(LOOK_ACTION)?;
//!
//! let mut player = EntityController::new(
//!     Vec3::ZERO,
//!     Body::new(0.0),
//!     Box::new(CursorLook::new(look)),
//!     15.0, // degrees per second
//! );
//! player.on_init();
//!
//! let camera = Camera2d::default();
//! let mut input = InputState::new();
//! let mut timestep = FixedTimestep::default();
//!
//! // Each frame:
//! let ctx = FrameContext { camera: &camera, input: &input, dt: frame_dt };
//! player.on_frame(&ctx);
//! for _ in 0..timestep.advance(frame_dt) {
//!     player.on_fixed_tick(timestep.step());
//! }
//! ```

pub mod camera;
pub mod controller;
pub mod debug_draw;
pub mod input;
pub mod render;
pub mod schedule;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export the controller core at crate level for convenience
pub use controller::{
    Body, Controller, CursorLook, EntityController, FrameContext, LookTargetProvider, OrbitLook,
    RotationState, DEFAULT_ROTATION_SPEED,
};
// Re-export camera and input types for convenience
pub use camera::Camera2d;
pub use debug_draw::{Color, DebugDraw, LineVertex};
pub use input::{InputError, InputState, PointerBindings, LOOK_ACTION};
// Re-export the render and scheduling types the demo loop needs
pub use render::{GpuContext, GpuContextConfig, LineRenderer};
pub use schedule::FixedTimestep;
