//! Debug Draw Module
//!
//! Transient visual diagnostics: lines, arrowed lines, and wireframe
//! spheres that live for exactly one frame. Callers queue shapes between
//! `begin_frame` calls; the renderer consumes the accumulated line-list
//! vertices. No other state is kept.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Segments per wireframe ring when drawing spheres.
pub const SPHERE_SEGMENTS: usize = 24;

/// Arrow head length as a fraction of the shaft length.
const ARROW_HEAD_FRACTION: f32 = 0.2;

/// Upper bound on the arrow head length in world units.
const ARROW_HEAD_MAX: f32 = 0.5;

/// Angle between the shaft and each head wing, in degrees.
const ARROW_HEAD_ANGLE: f32 = 150.0;

/// Shaft length below which the arrow head is skipped.
const ARROW_MIN_LENGTH: f32 = 1e-4;

/// RGBA color for debug shapes. The default color is white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.2, 0.2);
    pub const GREEN: Self = Self::rgb(0.2, 1.0, 0.2);
    pub const BLUE: Self = Self::rgb(0.3, 0.5, 1.0);
    pub const YELLOW: Self = Self::rgb(1.0, 0.9, 0.2);

    /// Opaque color from RGB components in 0..1.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Components as an RGBA array.
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// GPU-visible vertex for line-list rendering.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

static_assertions::assert_eq_size!(LineVertex, [u8; 28]);

/// Frame-scoped queue of debug line segments.
///
/// # Usage
///
/// ```rust
/// use aim_arena_engine::debug_draw::{Color, DebugDraw};
/// use glam::Vec3;
///
/// let mut debug = DebugDraw::new();
/// debug.begin_frame();
/// debug.line(Vec3::ZERO, Vec3::X, Color::default());
/// debug.arrow(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0), Color::GREEN);
/// debug.sphere(Vec3::new(2.0, 2.0, 0.0), 0.5, Color::YELLOW);
/// // hand debug.vertices() to the line renderer, then begin_frame again
/// ```
#[derive(Debug, Default)]
pub struct DebugDraw {
    vertices: Vec<LineVertex>,
}

impl DebugDraw {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard everything queued for the previous frame.
    pub fn begin_frame(&mut self) {
        self.vertices.clear();
    }

    /// Queue a line segment.
    pub fn line(&mut self, start: Vec3, end: Vec3, color: Color) {
        self.push_segment(start, end, color);
    }

    /// Queue a line segment with an arrow head at `end`.
    ///
    /// The head wings sit in the XY plane. Degenerate (near zero length)
    /// arrows draw the shaft only.
    pub fn arrow(&mut self, start: Vec3, end: Vec3, color: Color) {
        self.push_segment(start, end, color);

        let shaft = end - start;
        let length = shaft.truncate().length();
        if length < ARROW_MIN_LENGTH {
            return;
        }

        let head_length = (length * ARROW_HEAD_FRACTION).min(ARROW_HEAD_MAX);
        let shaft_angle = shaft.y.atan2(shaft.x);
        for side in [1.0, -1.0] {
            let wing_angle = shaft_angle + (ARROW_HEAD_ANGLE * side).to_radians();
            let (sin, cos) = wing_angle.sin_cos();
            let wing = end + Vec3::new(cos, sin, 0.0) * head_length;
            self.push_segment(end, wing, color);
        }
    }

    /// Queue a wireframe sphere: three orthogonal rings of
    /// [`SPHERE_SEGMENTS`] segments each.
    pub fn sphere(&mut self, center: Vec3, radius: f32, color: Color) {
        let step = std::f32::consts::TAU / SPHERE_SEGMENTS as f32;
        for ring in 0..3 {
            for segment in 0..SPHERE_SEGMENTS {
                let a0 = segment as f32 * step;
                let a1 = (segment + 1) as f32 * step;
                let p0 = center + ring_point(ring, a0) * radius;
                let p1 = center + ring_point(ring, a1) * radius;
                self.push_segment(p0, p1, color);
            }
        }
    }

    /// Vertices queued this frame, two per segment.
    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    /// Number of queued segments.
    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Whether anything is queued this frame.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn push_segment(&mut self, start: Vec3, end: Vec3, color: Color) {
        let color = color.to_array();
        self.vertices.push(LineVertex {
            position: start.to_array(),
            color,
        });
        self.vertices.push(LineVertex {
            position: end.to_array(),
            color,
        });
    }
}

/// Unit point on one of the three orthogonal rings (XY, XZ, YZ).
fn ring_point(ring: usize, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    match ring {
        0 => Vec3::new(cos, sin, 0.0),
        1 => Vec3::new(cos, 0.0, sin),
        _ => Vec3::new(0.0, cos, sin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_adds_one_segment() {
        let mut debug = DebugDraw::new();
        debug.line(Vec3::ZERO, Vec3::X, Color::default());
        assert_eq!(debug.segment_count(), 1);
        assert_eq!(debug.vertices().len(), 2);
    }

    #[test]
    fn test_default_color_is_white() {
        let mut debug = DebugDraw::new();
        debug.line(Vec3::ZERO, Vec3::X, Color::default());
        assert_eq!(debug.vertices()[0].color, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_arrow_adds_head_wings() {
        let mut debug = DebugDraw::new();
        debug.arrow(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0), Color::GREEN);
        // Shaft plus two wings
        assert_eq!(debug.segment_count(), 3);

        // Wings point backwards from the tip
        for vertex in &debug.vertices()[2..] {
            assert!(vertex.position[0] <= 4.0 + 1e-5);
        }
    }

    #[test]
    fn test_degenerate_arrow_has_no_head() {
        let mut debug = DebugDraw::new();
        debug.arrow(Vec3::ONE, Vec3::ONE, Color::default());
        assert_eq!(debug.segment_count(), 1);
    }

    #[test]
    fn test_sphere_segment_count() {
        let mut debug = DebugDraw::new();
        debug.sphere(Vec3::ZERO, 1.0, Color::default());
        assert_eq!(debug.segment_count(), 3 * SPHERE_SEGMENTS);
    }

    #[test]
    fn test_sphere_points_on_radius() {
        let center = Vec3::new(1.0, 2.0, 0.0);
        let mut debug = DebugDraw::new();
        debug.sphere(center, 2.5, Color::default());
        for vertex in debug.vertices() {
            let distance = (Vec3::from_array(vertex.position) - center).length();
            assert!((distance - 2.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_begin_frame_clears_queue() {
        let mut debug = DebugDraw::new();
        debug.line(Vec3::ZERO, Vec3::X, Color::default());
        debug.begin_frame();
        assert!(debug.is_empty());
    }
}
