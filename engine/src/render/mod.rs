//! Render Module
//!
//! Minimal wgpu-based rendering for the arena: a shared GPU context and a
//! line-list renderer that draws the debug overlay produced by
//! [`DebugDraw`](crate::debug_draw::DebugDraw).

pub mod gpu_context;
pub mod line_renderer;
pub mod shader;

// Re-export commonly used types for convenience
pub use gpu_context::{GpuContext, GpuContextConfig};
pub use line_renderer::{CameraUniforms, LineRenderer};
pub use shader::LINE_SHADER_SOURCE;
