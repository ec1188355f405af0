//! Game Module
//!
//! Contains game-specific wiring that builds on top of the engine: tuning
//! configuration, scene descriptors with spawn-time validation, and the
//! player and sentry entities.

pub mod config;
pub mod player;
pub mod sentry;
pub mod spawn;

// Re-exports from game modules
pub use config::{ConfigError, GameConfig};
pub use player::{default_player_spec, spawn_player};
pub use sentry::{default_sentry_spec, spawn_sentry};
pub use spawn::{find_body, ChildSpec, EntitySpec, SpawnError, BODY_CHILD_NAME};
