//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::data::load_enemy_definitions;
use super::spawning::{reset_spawner, spawn_enemies, EnemySpawner};
use super::systems;
use crate::core::{GameSet, GameState};

/// Enemy plugin - handles enemy data, spawning and movement.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemySpawner>()
            .add_systems(Startup, load_enemy_definitions)
            .add_systems(OnEnter(GameState::InGame), reset_spawner)
            .add_systems(
                Update,
                (
                    spawn_enemies,
                    systems::move_enemies,
                    systems::despawn_escaped_enemies,
                )
                    .chain()
                    .in_set(GameSet::Movement),
            )
            .add_systems(Update, systems::enemy_fire.in_set(GameSet::Firing));
    }
}
