//! Rotation Smoothing Module
//!
//! Bounded-rate rotation toward a target bearing. All angles are degrees
//! measured about the +Z axis in the XY movement plane, so a bearing of 0
//! points along +X and 90 along +Y.
//!
//! The smoother never overshoots: when the remaining angular distance fits
//! inside one step it snaps exactly onto the target, otherwise it advances
//! along the shorter angular path by the step amount.

use glam::Vec3;

/// Squared direction length below which a look offset is treated as
/// degenerate (the look target sits on the entity position). Offsets under
/// a tenth of a millimeter in world units carry no usable bearing and are
/// indistinguishable from projection round-trip noise.
const MIN_DIRECTION_LENGTH_SQ: f32 = 1e-8;

/// Wrap an angle in degrees into the `[-180, 180)` range.
///
/// # Examples
/// ```
/// use aim_arena_engine::controller::rotation::wrap_degrees;
///
/// assert_eq!(wrap_degrees(270.0), -90.0);
/// assert_eq!(wrap_degrees(-190.0), 170.0);
/// assert_eq!(wrap_degrees(180.0), -180.0);
/// ```
pub fn wrap_degrees(angle: f32) -> f32 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}

/// Signed shortest angular path from `from` to `to`, in degrees.
///
/// The result lies in `[-180, 180)`; positive values rotate
/// counter-clockwise.
pub fn shortest_angle_delta(from: f32, to: f32) -> f32 {
    wrap_degrees(to - from)
}

/// Rotate `current` toward `target` by at most `max_step` degrees.
///
/// Takes the shorter angular path. If the remaining distance is within
/// `max_step`, the result is exactly the (wrapped) target — no overshoot,
/// no asymptotic creep. Negative `max_step` values are treated as zero.
///
/// # Arguments
/// * `current` - Current orientation in degrees
/// * `target` - Target bearing in degrees
/// * `max_step` - Maximum rotation this call, in degrees
///
/// # Examples
/// ```
/// use aim_arena_engine::controller::rotation::rotate_towards;
///
/// // Far from the target: advance by the full step
/// assert_eq!(rotate_towards(0.0, 90.0, 15.0), 15.0);
/// // Within one step: snap exactly
/// assert_eq!(rotate_towards(80.0, 90.0, 15.0), 90.0);
/// ```
pub fn rotate_towards(current: f32, target: f32, max_step: f32) -> f32 {
    let max_step = max_step.max(0.0);
    let delta = shortest_angle_delta(current, target);
    if delta.abs() <= max_step {
        wrap_degrees(target)
    } else {
        wrap_degrees(current + max_step.copysign(delta))
    }
}

/// Bearing of a direction vector in the XY plane, in degrees.
///
/// Computes `atan2(y, x)` over the XY projection of `direction`. Returns
/// `None` when the projected direction is zero-length or non-finite, so a
/// degenerate look offset can never poison an orientation with NaN.
pub fn bearing_degrees(direction: Vec3) -> Option<f32> {
    let planar = direction.truncate();
    if !planar.is_finite() || planar.length_squared() < MIN_DIRECTION_LENGTH_SQ {
        return None;
    }
    Some(planar.y.atan2(planar.x).to_degrees())
}

/// Current and target orientation of a rotatable body.
///
/// The target is always the bearing from the entity position to its look
/// target; when that offset is degenerate the previous target is retained
/// and the body holds its heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    /// Current orientation in degrees.
    pub orientation: f32,
    /// Target bearing in degrees.
    pub target: f32,
}

impl RotationState {
    /// Create a state at rest: the target matches the orientation.
    pub fn new(orientation: f32) -> Self {
        Self {
            orientation,
            target: orientation,
        }
    }

    /// Recompute the target bearing from the entity position toward a look
    /// target. A degenerate offset (look target on the entity position)
    /// keeps the previous target.
    pub fn retarget(&mut self, position: Vec3, look_target: Vec3) {
        if let Some(bearing) = bearing_degrees(look_target - position) {
            self.target = bearing;
        }
    }

    /// Advance the orientation toward the target by at most `max_step`
    /// degrees.
    pub fn step(&mut self, max_step: f32) {
        self.orientation = rotate_towards(self.orientation, self.target, max_step);
    }

    /// Remaining angular distance to the target, in degrees (always >= 0).
    pub fn remaining(&self) -> f32 {
        shortest_angle_delta(self.orientation, self.target).abs()
    }
}
