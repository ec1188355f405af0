//! Entity Controller
//!
//! Composes a look-target provider with the rotation smoother and exposes
//! the three scheduler-invoked lifecycle methods: init at spawn, look
//! sampling on the variable frame tick, rotation on the fixed tick.

use glam::Vec3;

use super::look_target::{FrameContext, LookTargetProvider};
use super::rotation::RotationState;

/// Default angular rate in degrees per second.
pub const DEFAULT_ROTATION_SPEED: f32 = 15.0;

/// The rotatable visual sub-object of an entity.
///
/// Injected at construction; the controller mutates nothing else. The
/// orientation is degrees about +Z in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    /// Current visual orientation in degrees.
    pub orientation: f32,
}

impl Body {
    /// Create a body at the given orientation in degrees.
    pub fn new(orientation: f32) -> Self {
        Self { orientation }
    }
}

/// Scheduler-invoked lifecycle of a controlled entity.
///
/// The host drives these explicitly: `on_init` once after spawning,
/// `on_frame` every variable-rate frame (input sampling), `on_fixed_tick`
/// every fixed-rate simulation step (rotation update).
pub trait Controller {
    /// Called once after spawning, before the first tick.
    fn on_init(&mut self);
    /// Called every variable-rate frame with the host context.
    fn on_frame(&mut self, ctx: &FrameContext<'_>);
    /// Called every fixed-rate simulation step with the fixed delta in
    /// seconds.
    fn on_fixed_tick(&mut self, dt: f32);
}

/// An entity that rotates its body toward a provider-supplied look target.
///
/// Owns the entity pose (position plus the injected [`Body`]), the current
/// look target, the rotation state, and the boxed provider strategy. Each
/// fixed tick mutates the body orientation only - never the position.
pub struct EntityController {
    position: Vec3,
    body: Body,
    rotation: RotationState,
    look_target: Vec3,
    provider: Box<dyn LookTargetProvider>,
    rotation_speed: f32,
}

impl std::fmt::Debug for EntityController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityController")
            .field("position", &self.position)
            .field("body", &self.body)
            .field("rotation", &self.rotation)
            .field("look_target", &self.look_target)
            .field("provider", &"<dyn LookTargetProvider>")
            .field("rotation_speed", &self.rotation_speed)
            .finish()
    }
}

impl EntityController {
    /// Create a controller.
    ///
    /// # Arguments
    /// * `position` - Entity position in world space
    /// * `body` - The injected rotatable sub-object
    /// * `provider` - Look-target strategy queried every frame
    /// * `rotation_speed` - Maximum angular rate in degrees per second
    pub fn new(
        position: Vec3,
        body: Body,
        provider: Box<dyn LookTargetProvider>,
        rotation_speed: f32,
    ) -> Self {
        Self {
            position,
            rotation: RotationState::new(body.orientation),
            look_target: position,
            body,
            provider,
            rotation_speed,
        }
    }

    /// Entity position in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Move the entity. The controller never does this itself; the host
    /// owns translation.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// The look target sampled on the most recent frame.
    pub fn look_target(&self) -> Vec3 {
        self.look_target
    }

    /// The bearing the body is currently turning toward, in degrees.
    pub fn look_rotation_target(&self) -> f32 {
        self.rotation.target
    }

    /// The rotatable body, including its current orientation.
    pub fn body(&self) -> Body {
        self.body
    }

    /// Current body orientation in degrees.
    pub fn body_orientation(&self) -> f32 {
        self.body.orientation
    }

    /// Maximum angular rate in degrees per second.
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }
}

impl Controller for EntityController {
    fn on_init(&mut self) {
        // Start at rest: looking at our own position, target bearing equal
        // to the body's spawn orientation, so the first tick holds steady.
        self.look_target = self.position;
        self.rotation = RotationState::new(self.body.orientation);
    }

    fn on_frame(&mut self, ctx: &FrameContext<'_>) {
        self.look_target = self.provider.look_target(ctx, self.position);
    }

    fn on_fixed_tick(&mut self, dt: f32) {
        self.rotation.retarget(self.position, self.look_target);
        self.rotation.step(self.rotation_speed * dt.max(0.0));
        self.body.orientation = self.rotation.orientation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera2d;
    use crate::input::InputState;

    /// Provider pinned to a fixed world point.
    struct FixedLook(Vec3);

    impl LookTargetProvider for FixedLook {
        fn look_target(&mut self, _ctx: &FrameContext<'_>, _self_position: Vec3) -> Vec3 {
            self.0
        }
    }

    fn frame<'a>(camera: &'a Camera2d, input: &'a InputState) -> FrameContext<'a> {
        FrameContext {
            camera,
            input,
            dt: 1.0 / 60.0,
        }
    }

    fn controller_at_origin(target: Vec3, speed: f32) -> EntityController {
        let mut controller = EntityController::new(
            Vec3::ZERO,
            Body::new(0.0),
            Box::new(FixedLook(target)),
            speed,
        );
        controller.on_init();
        controller
    }

    #[test]
    fn test_init_look_target_is_own_position() {
        let position = Vec3::new(4.0, -3.0, 0.0);
        let mut controller = EntityController::new(
            position,
            Body::new(30.0),
            Box::new(FixedLook(Vec3::ZERO)),
            15.0,
        );
        controller.on_init();
        assert_eq!(controller.look_target(), position);
        assert_eq!(controller.look_rotation_target(), 30.0);
    }

    #[test]
    fn test_fixed_tick_turns_toward_target() {
        let mut controller = controller_at_origin(Vec3::new(0.0, 10.0, 0.0), 15.0);
        let camera = Camera2d::default();
        let input = InputState::new();
        controller.on_frame(&frame(&camera, &input));

        controller.on_fixed_tick(1.0);
        assert!((controller.body_orientation() - 15.0).abs() < 1e-4);
        assert!((controller.look_rotation_target() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_fixed_tick_never_moves_position() {
        let mut controller = controller_at_origin(Vec3::new(10.0, 0.0, 0.0), 15.0);
        let camera = Camera2d::default();
        let input = InputState::new();
        controller.on_frame(&frame(&camera, &input));

        let before = controller.position();
        for _ in 0..10 {
            controller.on_fixed_tick(0.02);
        }
        assert_eq!(controller.position(), before);
    }

    #[test]
    fn test_target_on_position_holds_orientation() {
        let mut controller = controller_at_origin(Vec3::ZERO, 15.0);
        let camera = Camera2d::default();
        let input = InputState::new();
        controller.on_frame(&frame(&camera, &input));

        controller.on_fixed_tick(1.0);
        assert_eq!(controller.body_orientation(), 0.0);
        assert!(controller.body_orientation().is_finite());
    }
}
