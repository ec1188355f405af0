//! Camera Module
//!
//! Provides the top-down orthographic camera and its screen-to-world
//! projection. This module is window-system agnostic - it only deals with
//! camera state and math.

pub mod camera2d;

pub use camera2d::{Camera2d, DEFAULT_VIEW_HEIGHT};
