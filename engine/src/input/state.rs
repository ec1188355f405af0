//! Pointer State Tracking
//!
//! Tracks the latest cursor sample reported by the host window system,
//! using plain generic types so the engine stays decoupled from winit.
//! There is no cursor sample until the pointer first enters the window;
//! consumers must treat the position as optional.

use glam::Vec2;

/// Platform-agnostic pointer input state.
///
/// The host event loop calls the `handle_*` methods; gameplay reads the
/// state through [`PointerAction`](super::PointerAction) or directly via
/// [`cursor_position`](Self::cursor_position).
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Latest cursor position in physical pixels (origin top-left), if the
    /// pointer has ever been inside the window.
    cursor_position: Option<Vec2>,
    /// Whether the cursor is currently inside the window.
    cursor_in_window: bool,
}

impl InputState {
    /// Create a new input state with no cursor sample.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor movement in physical pixels (origin top-left).
    pub fn handle_cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor_position = Some(Vec2::new(x, y));
        self.cursor_in_window = true;
    }

    /// Record the cursor entering the window.
    pub fn handle_cursor_entered(&mut self) {
        self.cursor_in_window = true;
    }

    /// Record the cursor leaving the window.
    ///
    /// The last position sample is retained so aiming holds steady instead
    /// of jumping when the pointer crosses the window edge.
    pub fn handle_cursor_left(&mut self) {
        self.cursor_in_window = false;
    }

    /// Latest cursor position in physical pixels, or `None` if the pointer
    /// has never entered the window.
    pub fn cursor_position(&self) -> Option<Vec2> {
        self.cursor_position
    }

    /// Whether the cursor is currently inside the window.
    pub fn is_cursor_in_window(&self) -> bool {
        self.cursor_in_window
    }

    /// Reset all state to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
