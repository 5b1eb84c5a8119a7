//! Enemies module - enemy entities, movement, and spawning.

mod components;
pub mod data;
mod movement;
mod plugin;
mod spawning;
mod systems;

pub use components::*;
pub use data::{EnemyDefinition, EnemyRegistry};
pub use movement::Movement;
pub use plugin::EnemyPlugin;
pub use spawning::{spawn_enemy, spawn_position, EnemySpawner};
pub use systems::{despawn_escaped_enemies, enemy_fire, move_enemies};
