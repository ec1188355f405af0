//! Pointer Action Bindings
//!
//! Maps named pointer actions to physical pointer sources, allowing game
//! code to ask for "player/look" without caring where the value comes
//! from. Resolution happens once at initialization and fails loudly when a
//! name has no binding; reading a resolved action at runtime is fail-soft
//! (it simply yields no sample until the pointer produces one).

use std::collections::HashMap;

use glam::Vec2;
use thiserror::Error;

use super::state::InputState;

/// Name of the default look action bound to the cursor position.
pub const LOOK_ACTION: &str = "player/look";

/// Errors from resolving pointer actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The requested action name has no binding.
    #[error("no pointer binding named `{0}`")]
    UnboundAction(String),
}

/// Physical sources a pointer action can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    /// The window cursor position in physical pixels.
    CursorPosition,
}

/// Maps action names to pointer sources, supporting rebinding.
#[derive(Debug, Clone)]
pub struct PointerBindings {
    bindings: HashMap<String, PointerSource>,
}

impl Default for PointerBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerBindings {
    /// Create bindings with the default mapping:
    /// [`LOOK_ACTION`] = cursor position.
    pub fn new() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };
        bindings.bind(LOOK_ACTION, PointerSource::CursorPosition);
        bindings
    }

    /// Create an empty binding table (no actions bound).
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind an action name to a pointer source, replacing any previous
    /// binding for that name.
    pub fn bind(&mut self, name: &str, source: PointerSource) {
        self.bindings.insert(name.to_owned(), source);
    }

    /// Remove a binding. Returns true if the name was bound.
    pub fn unbind(&mut self, name: &str) -> bool {
        self.bindings.remove(name).is_some()
    }

    /// Resolve an action name into a readable handle.
    ///
    /// # Errors
    /// [`InputError::UnboundAction`] when the name has no binding. Callers
    /// are expected to resolve at initialization so a missing binding is
    /// reported once instead of faulting every tick.
    pub fn resolve(&self, name: &str) -> Result<PointerAction, InputError> {
        self.bindings
            .get(name)
            .copied()
            .map(|source| PointerAction { source })
            .ok_or_else(|| InputError::UnboundAction(name.to_owned()))
    }
}

/// A resolved pointer action handle.
#[derive(Debug, Clone, Copy)]
pub struct PointerAction {
    source: PointerSource,
}

impl PointerAction {
    /// Read the current value of the action in physical pixels.
    ///
    /// Returns `None` while the bound source has produced no sample yet
    /// (e.g. the cursor has never entered the window).
    pub fn read(&self, input: &InputState) -> Option<Vec2> {
        match self.source {
            PointerSource::CursorPosition => input.cursor_position(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_look_action_resolves() {
        let bindings = PointerBindings::new();
        assert!(bindings.resolve(LOOK_ACTION).is_ok());
    }

    #[test]
    fn test_unknown_action_is_unbound_error() {
        let bindings = PointerBindings::new();
        let err = bindings.resolve("player/fire").unwrap_err();
        assert_eq!(err, InputError::UnboundAction("player/fire".to_owned()));
    }

    #[test]
    fn test_unbind_removes_binding() {
        let mut bindings = PointerBindings::new();
        assert!(bindings.unbind(LOOK_ACTION));
        assert!(bindings.resolve(LOOK_ACTION).is_err());
        assert!(!bindings.unbind(LOOK_ACTION));
    }

    #[test]
    fn test_resolved_action_reads_cursor() {
        let bindings = PointerBindings::new();
        let action = bindings.resolve(LOOK_ACTION).unwrap();

        let mut input = InputState::new();
        assert!(action.read(&input).is_none());

        input.handle_cursor_moved(12.0, 34.0);
        assert_eq!(action.read(&input), Some(Vec2::new(12.0, 34.0)));
    }
}
