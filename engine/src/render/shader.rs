//! Line Shader
//!
//! WGSL source for the debug line pipeline, embedded as a constant so the
//! binary needs no asset files at runtime. Validated by the shader tests
//! with naga.

/// Vertex-colored line shader: transforms positions by the camera
/// view-projection matrix and passes the color straight through.
pub const LINE_SHADER_SOURCE: &str = r#"
struct CameraUniforms {
    view_proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: CameraUniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = camera.view_proj * vec4<f32>(in.position, 1.0);
    out.color = in.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;
