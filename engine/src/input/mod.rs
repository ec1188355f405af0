//! Input Module
//!
//! Provides platform-agnostic pointer input handling. This module is
//! decoupled from any specific windowing system (like winit) to allow for
//! flexible integration: the host event loop feeds raw cursor events into
//! [`InputState`], and gameplay reads them through named pointer actions.
//!
//! # Example
//!
//! ```rust
//! use aim_arena_engine::input::{InputState, PointerBindings, LOOK_ACTION};
//!
//! let bindings = PointerBindings::new();
//! let look = bindings.resolve(LOOK_ACTION).unwrap();
//!
//! let mut input = InputState::new();
//! input.handle_cursor_moved(320.0, 240.0);
//!
//! assert!(look.read(&input).is_some());
//! ```

pub mod actions;
pub mod state;

// Re-export commonly used types at module level
pub use actions::{InputError, PointerAction, PointerBindings, PointerSource, LOOK_ACTION};
pub use state::InputState;
