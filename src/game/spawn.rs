//! Entity Spawning
//!
//! Scene descriptors and spawn-time validation. The original controller
//! found its rotatable child by scanning the scene graph on the first
//! update and faulted later if the lookup failed; here the same
//! case-insensitive name search runs once at spawn and a missing child is
//! a typed error, so the controller itself always receives its body by
//! value.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::InputError;

/// Name the rotatable child must carry, matched case-insensitively.
pub const BODY_CHILD_NAME: &str = "body";

/// Errors from spawning an entity.
#[derive(Debug, Error)]
pub enum SpawnError {
    /// The entity descriptor has no child named "body".
    #[error("entity `{entity}` has no child named \"body\"")]
    MissingBody { entity: String },
    /// A required input action could not be resolved.
    #[error(transparent)]
    Input(#[from] InputError),
}

/// A named child node of an entity descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildSpec {
    /// Child name; the rotatable visual child is named "body".
    pub name: String,
    /// Initial orientation in degrees.
    #[serde(default)]
    pub orientation: f32,
}

/// Declarative description of an entity to spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpec {
    /// Entity name, used in diagnostics.
    pub name: String,
    /// Position in the XY plane.
    #[serde(default)]
    pub position: [f32; 2],
    /// Child nodes.
    #[serde(default)]
    pub children: Vec<ChildSpec>,
}

impl EntitySpec {
    /// Position as a world-space point on the gameplay plane.
    pub fn world_position(&self) -> Vec3 {
        Vec3::new(self.position[0], self.position[1], 0.0)
    }
}

/// Locate the rotatable "body" child of an entity descriptor.
///
/// # Errors
/// [`SpawnError::MissingBody`] when no child matches, reported once at
/// spawn time instead of faulting every tick.
pub fn find_body(spec: &EntitySpec) -> Result<&ChildSpec, SpawnError> {
    spec.children
        .iter()
        .find(|child| child.name.eq_ignore_ascii_case(BODY_CHILD_NAME))
        .ok_or_else(|| SpawnError::MissingBody {
            entity: spec.name.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_with_children(names: &[&str]) -> EntitySpec {
        EntitySpec {
            name: "test".to_owned(),
            position: [1.0, 2.0],
            children: names
                .iter()
                .map(|name| ChildSpec {
                    name: (*name).to_owned(),
                    orientation: 0.0,
                })
                .collect(),
        }
    }

    #[test]
    fn test_find_body_is_case_insensitive() {
        for name in ["body", "Body", "BODY"] {
            let spec = spec_with_children(&["shadow", name]);
            assert_eq!(find_body(&spec).unwrap().name, name);
        }
    }

    #[test]
    fn test_find_body_missing_is_error() {
        let spec = spec_with_children(&["shadow", "turret"]);
        let err = find_body(&spec).unwrap_err();
        assert!(matches!(err, SpawnError::MissingBody { ref entity } if entity == "test"));
    }

    #[test]
    fn test_world_position_on_plane() {
        let spec = spec_with_children(&["body"]);
        assert_eq!(spec.world_position(), Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_spec_deserializes_with_defaults() {
        let spec: EntitySpec =
            serde_json::from_str(r#"{"name": "bare", "children": [{"name": "Body"}]}"#).unwrap();
        assert_eq!(spec.position, [0.0, 0.0]);
        assert_eq!(find_body(&spec).unwrap().orientation, 0.0);
    }
}
