//! Sentry Entity
//!
//! A scripted entity that scans its surroundings: its look target sweeps a
//! circle around its own position, so the body pans at the bounded rate
//! like a watchtower camera. Demonstrates a second provider strategy next
//! to the cursor-driven player.

use crate::controller::{Body, Controller, EntityController, OrbitLook};

use super::config::GameConfig;
use super::spawn::{find_body, ChildSpec, EntitySpec, SpawnError};

/// Spawn a sentry entity from its descriptor.
///
/// # Errors
/// [`SpawnError::MissingBody`] when the descriptor has no "body" child.
pub fn spawn_sentry(spec: &EntitySpec, config: &GameConfig) -> Result<EntityController, SpawnError> {
    let body = find_body(spec)?;
    let position = spec.world_position();

    let scan = OrbitLook::new(position, config.sentry_scan_radius, config.sentry_scan_speed);
    let mut controller = EntityController::new(
        position,
        Body::new(body.orientation),
        Box::new(scan),
        config.rotation_speed,
    );
    controller.on_init();

    log::info!("spawned sentry `{}` at {}", spec.name, position);
    Ok(controller)
}

/// Default sentry descriptor placed from the config.
pub fn default_sentry_spec(config: &GameConfig) -> EntitySpec {
    EntitySpec {
        name: "sentry".to_owned(),
        position: config.sentry_position,
        children: vec![ChildSpec {
            name: "body".to_owned(),
            orientation: 180.0,
        }],
    }
}
