//! Look-Target Providers
//!
//! Strategies that answer one question each frame: "what world-space point
//! should this entity look at?" The entity controller is polymorphic over
//! [`LookTargetProvider`], so cursor-driven players and scripted or
//! AI-driven entities share the same rotation path.

use glam::Vec3;

use crate::camera::Camera2d;
use crate::controller::rotation::wrap_degrees;
use crate::input::{InputState, PointerAction};

/// Per-frame host data handed to controllers and providers.
///
/// Groups the boundaries the host environment supplies: the active camera
/// (for screen-to-world projection), the pointer input state, and the
/// variable frame delta in seconds.
pub struct FrameContext<'a> {
    /// The currently active camera.
    pub camera: &'a Camera2d,
    /// Pointer input state fed by the host event loop.
    pub input: &'a InputState,
    /// Variable-rate frame delta in seconds.
    pub dt: f32,
}

/// A strategy producing a world-space look target each frame.
///
/// Implementations must return a valid point on every call; when a
/// provider has nothing better to offer it returns `self_position`, which
/// the rotation smoother treats as "hold the current heading".
pub trait LookTargetProvider {
    /// Produce the world-space point the entity should look at this frame.
    fn look_target(&mut self, ctx: &FrameContext<'_>, self_position: Vec3) -> Vec3;
}

/// Player variant: aims at the cursor.
///
/// Reads the resolved pointer action and projects the cursor sample from
/// screen space onto the gameplay plane through the active camera. Until
/// the pointer produces a first sample the provider fails soft and returns
/// the entity's own position.
pub struct CursorLook {
    action: PointerAction,
}

impl CursorLook {
    /// Create a cursor provider from an already-resolved pointer action.
    ///
    /// Resolution (and therefore the unbound-action failure) happens at
    /// spawn time, not here.
    pub fn new(action: PointerAction) -> Self {
        Self { action }
    }
}

impl LookTargetProvider for CursorLook {
    fn look_target(&mut self, ctx: &FrameContext<'_>, self_position: Vec3) -> Vec3 {
        match self.action.read(ctx.input) {
            Some(screen) => ctx.camera.screen_to_world(screen),
            None => self_position,
        }
    }
}

/// Scripted variant: sweeps the look target around a circle.
///
/// A deterministic stand-in for AI-driven aiming; sentries use it to scan
/// their surroundings. The sweep advances with the frame delta, so the
/// angular speed is frame-rate independent.
pub struct OrbitLook {
    /// Center of the swept circle.
    pub center: Vec3,
    /// Radius of the swept circle in world units.
    pub radius: f32,
    /// Sweep speed in degrees per second.
    pub angular_speed: f32,
    /// Current sweep angle in degrees.
    phase: f32,
}

impl OrbitLook {
    /// Create a sweep around `center` starting at phase 0 (along +X).
    pub fn new(center: Vec3, radius: f32, angular_speed: f32) -> Self {
        Self {
            center,
            radius,
            angular_speed,
            phase: 0.0,
        }
    }

    /// Current sweep angle in degrees.
    pub fn phase(&self) -> f32 {
        self.phase
    }
}

impl LookTargetProvider for OrbitLook {
    fn look_target(&mut self, ctx: &FrameContext<'_>, _self_position: Vec3) -> Vec3 {
        self.phase = wrap_degrees(self.phase + self.angular_speed * ctx.dt);
        let (sin, cos) = self.phase.to_radians().sin_cos();
        self.center + Vec3::new(cos, sin, 0.0) * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{PointerBindings, LOOK_ACTION};

    fn test_camera() -> Camera2d {
        Camera2d::new(Vec3::ZERO, 20.0, 800, 600)
    }

    #[test]
    fn test_cursor_look_projects_sample() {
        let bindings = PointerBindings::new();
        let mut provider = CursorLook::new(bindings.resolve(LOOK_ACTION).unwrap());

        let camera = test_camera();
        let mut input = InputState::new();
        input.handle_cursor_moved(400.0, 0.0); // top center of the screen

        let ctx = FrameContext {
            camera: &camera,
            input: &input,
            dt: 1.0 / 60.0,
        };
        let target = provider.look_target(&ctx, Vec3::new(5.0, 5.0, 0.0));
        assert!((target - Vec3::new(0.0, 10.0, 0.0)).length() < 1e-3);
        assert_eq!(target.z, 0.0);
    }

    #[test]
    fn test_cursor_look_fails_soft_without_sample() {
        let bindings = PointerBindings::new();
        let mut provider = CursorLook::new(bindings.resolve(LOOK_ACTION).unwrap());

        let camera = test_camera();
        let input = InputState::new(); // no cursor sample yet
        let ctx = FrameContext {
            camera: &camera,
            input: &input,
            dt: 1.0 / 60.0,
        };

        let own_position = Vec3::new(3.0, -1.0, 0.0);
        assert_eq!(provider.look_target(&ctx, own_position), own_position);
    }

    #[test]
    fn test_orbit_look_stays_on_circle() {
        let center = Vec3::new(2.0, 2.0, 0.0);
        let mut provider = OrbitLook::new(center, 4.0, 90.0);

        let camera = test_camera();
        let input = InputState::new();
        let ctx = FrameContext {
            camera: &camera,
            input: &input,
            dt: 0.25,
        };

        for _ in 0..16 {
            let target = provider.look_target(&ctx, Vec3::ZERO);
            assert!(((target - center).length() - 4.0).abs() < 1e-4);
            assert_eq!(target.z, 0.0);
        }
    }

    #[test]
    fn test_orbit_look_advances_with_dt() {
        let mut provider = OrbitLook::new(Vec3::ZERO, 1.0, 90.0);

        let camera = test_camera();
        let input = InputState::new();
        let ctx = FrameContext {
            camera: &camera,
            input: &input,
            dt: 0.5,
        };

        provider.look_target(&ctx, Vec3::ZERO);
        assert!((provider.phase() - 45.0).abs() < 1e-4);
        provider.look_target(&ctx, Vec3::ZERO);
        assert!((provider.phase() - 90.0).abs() < 1e-4);
    }
}
