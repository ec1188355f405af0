//! Player Entity
//!
//! Wires the cursor-aimed player: validates the "body" child and the look
//! action binding at spawn, then hands a [`CursorLook`] provider to the
//! entity controller.

use crate::controller::{Body, Controller, CursorLook, EntityController};
use crate::input::{PointerBindings, LOOK_ACTION};

use super::config::GameConfig;
use super::spawn::{find_body, ChildSpec, EntitySpec, SpawnError};

/// Spawn the player entity from its descriptor.
///
/// # Errors
/// [`SpawnError::MissingBody`] when the descriptor has no "body" child;
/// [`SpawnError::Input`] when the look action is unbound. Both surface
/// once, at spawn.
pub fn spawn_player(
    spec: &EntitySpec,
    bindings: &PointerBindings,
    config: &GameConfig,
) -> Result<EntityController, SpawnError> {
    let body = find_body(spec)?;
    let action = bindings.resolve(LOOK_ACTION)?;

    let mut controller = EntityController::new(
        spec.world_position(),
        Body::new(body.orientation),
        Box::new(CursorLook::new(action)),
        config.rotation_speed,
    );
    controller.on_init();

    log::info!(
        "spawned player `{}` at {} ({} deg/s)",
        spec.name,
        controller.position(),
        config.rotation_speed
    );
    Ok(controller)
}

/// Default player descriptor: at the origin with a zero-oriented body.
pub fn default_player_spec() -> EntitySpec {
    EntitySpec {
        name: "player".to_owned(),
        position: [0.0, 0.0],
        children: vec![ChildSpec {
            name: "Body".to_owned(),
            orientation: 0.0,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_player_succeeds_with_default_spec() {
        let controller = spawn_player(
            &default_player_spec(),
            &PointerBindings::new(),
            &GameConfig::default(),
        )
        .unwrap();
        assert_eq!(controller.rotation_speed(), 15.0);
        assert_eq!(controller.look_target(), controller.position());
    }

    #[test]
    fn test_spawn_player_without_body_fails() {
        let mut spec = default_player_spec();
        spec.children.clear();
        let err = spawn_player(&spec, &PointerBindings::new(), &GameConfig::default()).unwrap_err();
        assert!(matches!(err, SpawnError::MissingBody { .. }));
    }

    #[test]
    fn test_spawn_player_with_unbound_look_fails() {
        let err = spawn_player(
            &default_player_spec(),
            &PointerBindings::empty(),
            &GameConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SpawnError::Input(_)));
    }
}
