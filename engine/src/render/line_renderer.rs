//! Line Renderer
//!
//! Renders the debug-draw line list with a single pipeline: one camera
//! uniform, one growable vertex buffer, uploaded fresh every frame.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::debug_draw::LineVertex;

use super::gpu_context::GpuContext;
use super::shader::LINE_SHADER_SOURCE;

/// Initial vertex buffer capacity; the buffer doubles whenever a frame
/// queues more vertices than fit.
const INITIAL_VERTEX_CAPACITY: usize = 1024;

/// Camera data uploaded to the line shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct CameraUniforms {
    pub view_proj: [[f32; 4]; 4],
}

static_assertions::assert_eq_size!(CameraUniforms, [u8; 64]);

impl CameraUniforms {
    /// Pack a view-projection matrix for upload.
    pub fn new(view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

/// Pipeline and buffers for drawing colored line lists.
pub struct LineRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    vertex_count: u32,
}

impl LineRenderer {
    /// Create the line pipeline against the context's surface format.
    pub fn new(gpu: &GpuContext) -> Self {
        let shader = gpu
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Line Shader"),
                source: wgpu::ShaderSource::Wgsl(LINE_SHADER_SOURCE.into()),
            });

        let bind_group_layout =
            gpu.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Line Bind Group Layout"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    }],
                });

        let pipeline_layout = gpu
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Line Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        let pipeline = gpu
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Line Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<LineVertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &[
                            wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32x3,
                                offset: 0,
                                shader_location: 0,
                            },
                            wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32x4,
                                offset: 12,
                                shader_location: 1,
                            },
                        ],
                    }],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: gpu.surface_config.format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::LineList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        let uniform_buffer =
            gpu.create_uniform_buffer("Line Camera Uniforms", &CameraUniforms::default());

        let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Line Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let vertex_buffer = gpu.create_dynamic_vertex_buffer(
            "Line Vertices",
            (INITIAL_VERTEX_CAPACITY * std::mem::size_of::<LineVertex>()) as u64,
        );

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            vertex_count: 0,
        }
    }

    /// Upload this frame's camera matrix and vertices.
    ///
    /// Grows the vertex buffer when the frame queues more vertices than the
    /// current capacity.
    pub fn prepare(&mut self, gpu: &GpuContext, view_proj: Mat4, vertices: &[LineVertex]) {
        gpu.write_buffer(&self.uniform_buffer, &[CameraUniforms::new(view_proj)]);

        if vertices.len() > self.vertex_capacity {
            let new_capacity = vertices.len().next_power_of_two();
            self.vertex_buffer = gpu.create_dynamic_vertex_buffer(
                "Line Vertices",
                (new_capacity * std::mem::size_of::<LineVertex>()) as u64,
            );
            self.vertex_capacity = new_capacity;
        }

        if !vertices.is_empty() {
            gpu.write_buffer(&self.vertex_buffer, vertices);
        }
        self.vertex_count = vertices.len() as u32;
    }

    /// Record the draw into an open render pass.
    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        if self.vertex_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }

    /// Vertices uploaded for the current frame.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Current vertex buffer capacity, in vertices.
    pub fn vertex_capacity(&self) -> usize {
        self.vertex_capacity
    }
}
