//! Camera Tests - Screen/World Projection
//!
//! Tests for the top-down camera: pixel-to-world mapping, axis flips,
//! round trips, and viewport handling.

use approx::assert_relative_eq;
use glam::{Vec2, Vec3, Vec4};

use aim_arena_engine::camera::Camera2d;

// ============================================================================
// Screen -> World
// ============================================================================

#[test]
fn test_center_pixel_hits_camera_center() {
    let camera = Camera2d::new(Vec3::new(7.0, -4.0, 0.0), 20.0, 800, 600);
    let world = camera.screen_to_world(Vec2::new(400.0, 300.0));
    assert_relative_eq!(world.x, 7.0, epsilon = 1e-3);
    assert_relative_eq!(world.y, -4.0, epsilon = 1e-3);
    assert_eq!(world.z, 0.0);
}

#[test]
fn test_vertical_extent_matches_view_height() {
    let camera = Camera2d::new(Vec3::ZERO, 20.0, 800, 600);
    let top = camera.screen_to_world(Vec2::new(400.0, 0.0));
    let bottom = camera.screen_to_world(Vec2::new(400.0, 600.0));
    assert_relative_eq!(top.y, 10.0, epsilon = 1e-3);
    assert_relative_eq!(bottom.y, -10.0, epsilon = 1e-3);
}

#[test]
fn test_horizontal_extent_follows_aspect() {
    // 800x600 -> aspect 4:3 -> half width = 10 * 4/3
    let camera = Camera2d::new(Vec3::ZERO, 20.0, 800, 600);
    let left = camera.screen_to_world(Vec2::new(0.0, 300.0));
    assert_relative_eq!(left.x, -13.3333, epsilon = 1e-3);
}

#[test]
fn test_screen_y_down_maps_to_world_y_up() {
    let camera = Camera2d::new(Vec3::ZERO, 20.0, 800, 600);
    let high = camera.screen_to_world(Vec2::new(400.0, 100.0));
    let low = camera.screen_to_world(Vec2::new(400.0, 500.0));
    assert!(high.y > low.y);
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_world_screen_round_trip() {
    let camera = Camera2d::new(Vec3::new(-3.0, 9.0, 0.0), 42.0, 1920, 1080);
    for world in [
        Vec3::ZERO,
        Vec3::new(-3.0, 9.0, 0.0),
        Vec3::new(12.5, -7.25, 0.0),
    ] {
        let back = camera.screen_to_world(camera.world_to_screen(world));
        assert!((back - world).length() < 1e-3);
    }
}

#[test]
fn test_projection_matrix_agrees_with_screen_mapping() {
    let camera = Camera2d::new(Vec3::new(1.0, 2.0, 0.0), 20.0, 800, 600);
    let world = camera.screen_to_world(Vec2::new(200.0, 150.0));

    // Push the world point through the render matrix; it must land on the
    // same NDC coordinate the pixel corresponds to.
    let clip = camera.view_projection() * Vec4::new(world.x, world.y, world.z, 1.0);
    let ndc = Vec2::new(clip.x / clip.w, clip.y / clip.w);
    assert_relative_eq!(ndc.x, -0.5, epsilon = 1e-4);
    assert_relative_eq!(ndc.y, 0.5, epsilon = 1e-4);
}

// ============================================================================
// Viewport Handling
// ============================================================================

#[test]
fn test_resize_changes_mapping() {
    let mut camera = Camera2d::new(Vec3::ZERO, 20.0, 800, 600);
    let before = camera.screen_to_world(Vec2::new(800.0, 300.0));
    camera.set_viewport(1600, 600);
    let after = camera.screen_to_world(Vec2::new(1600.0, 300.0));
    // The right edge is further out in world space at the wider aspect
    assert!(after.x > before.x);
}

#[test]
fn test_degenerate_viewport_is_clamped() {
    let mut camera = Camera2d::new(Vec3::ZERO, 20.0, 800, 600);
    camera.set_viewport(0, 0);
    assert_eq!(camera.viewport(), (1, 1));
    // Projection still produces finite points
    let world = camera.screen_to_world(Vec2::new(0.0, 0.0));
    assert!(world.is_finite());
}
