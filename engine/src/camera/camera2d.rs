//! Orthographic Top-Down Camera
//!
//! Projects between physical screen pixels and world points on the z = 0
//! gameplay plane. Screen coordinates follow the windowing convention
//! (origin top-left, +y down); world coordinates have +y up, so the
//! projection flips the vertical axis.

use glam::{Mat4, Vec2, Vec3};

/// Default vertical world extent visible through the camera, in world units.
pub const DEFAULT_VIEW_HEIGHT: f32 = 20.0;

/// Smallest accepted view height, to keep the projection invertible.
const MIN_VIEW_HEIGHT: f32 = 0.001;

/// Depth range of the orthographic projection. Gameplay lives on z = 0;
/// the range only needs to contain it.
const ORTHO_NEAR: f32 = -100.0;
const ORTHO_FAR: f32 = 100.0;

/// Top-down orthographic camera.
///
/// The camera looks straight down the -Z axis at `center`; `view_height`
/// sets the zoom (world units spanned vertically), and the horizontal
/// extent follows from the viewport aspect ratio.
#[derive(Debug, Clone)]
pub struct Camera2d {
    /// World point at the center of the screen (z is ignored for
    /// projection; gameplay results always land on z = 0).
    pub center: Vec3,
    /// World units visible vertically.
    pub view_height: f32,
    /// Surface size in physical pixels.
    viewport: (u32, u32),
}

impl Default for Camera2d {
    fn default() -> Self {
        Self::new(Vec3::ZERO, DEFAULT_VIEW_HEIGHT, 1280, 720)
    }
}

impl Camera2d {
    /// Create a camera centered on `center`.
    ///
    /// # Arguments
    /// * `center` - World point at the screen center
    /// * `view_height` - World units spanned vertically (clamped to a small
    ///   positive minimum)
    /// * `width`, `height` - Viewport size in physical pixels (zero is
    ///   clamped to one)
    pub fn new(center: Vec3, view_height: f32, width: u32, height: u32) -> Self {
        Self {
            center,
            view_height: view_height.max(MIN_VIEW_HEIGHT),
            viewport: (width.max(1), height.max(1)),
        }
    }

    /// Update the viewport size after a window resize.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width.max(1), height.max(1));
    }

    /// Current viewport size in physical pixels.
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Viewport aspect ratio (width / height).
    pub fn aspect(&self) -> f32 {
        self.viewport.0 as f32 / self.viewport.1 as f32
    }

    /// Half the visible world extent along X and Y.
    pub fn half_extents(&self) -> Vec2 {
        let half_height = self.view_height * 0.5;
        Vec2::new(half_height * self.aspect(), half_height)
    }

    /// Project a screen position onto the z = 0 gameplay plane.
    ///
    /// # Arguments
    /// * `screen` - Position in physical pixels, origin top-left, +y down
    ///
    /// # Returns
    /// The world point under that pixel, with z zeroed.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec3 {
        let (width, height) = self.viewport;
        // Pixels -> NDC (-1..1), flipping y so +y points up in the world
        let ndc_x = screen.x / width as f32 * 2.0 - 1.0;
        let ndc_y = 1.0 - screen.y / height as f32 * 2.0;

        let half = self.half_extents();
        Vec3::new(
            self.center.x + ndc_x * half.x,
            self.center.y + ndc_y * half.y,
            0.0,
        )
    }

    /// Project a world point back to screen pixels (inverse of
    /// [`screen_to_world`](Self::screen_to_world) for points on the
    /// gameplay plane).
    pub fn world_to_screen(&self, world: Vec3) -> Vec2 {
        let (width, height) = self.viewport;
        let half = self.half_extents();
        let ndc_x = (world.x - self.center.x) / half.x;
        let ndc_y = (world.y - self.center.y) / half.y;

        Vec2::new(
            (ndc_x + 1.0) * 0.5 * width as f32,
            (1.0 - ndc_y) * 0.5 * height as f32,
        )
    }

    /// Combined view-projection matrix for rendering.
    pub fn view_projection(&self) -> Mat4 {
        let half = self.half_extents();
        Mat4::orthographic_rh(
            self.center.x - half.x,
            self.center.x + half.x,
            self.center.y - half.y,
            self.center.y + half.y,
            ORTHO_NEAR,
            ORTHO_FAR,
        )
    }
}
