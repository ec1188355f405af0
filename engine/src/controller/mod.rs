//! Controller Module
//!
//! The look-at controller core: bounded-rate rotation smoothing, pluggable
//! look-target provider strategies, and the entity controller that ties
//! them to the scheduler lifecycle.

pub mod entity;
pub mod look_target;
pub mod rotation;

pub use entity::{Body, Controller, EntityController, DEFAULT_ROTATION_SPEED};
pub use look_target::{CursorLook, FrameContext, LookTargetProvider, OrbitLook};
pub use rotation::{
    bearing_degrees, rotate_towards, shortest_angle_delta, wrap_degrees, RotationState,
};
