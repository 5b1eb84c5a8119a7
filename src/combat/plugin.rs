//! Combat plugin - projectile hits and damage feedback.

use bevy::prelude::*;

use super::systems;
use crate::core::GameSet;

/// Combat plugin - handles all combat systems.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                systems::handle_projectile_hits,
                systems::despawn_offscreen_projectiles,
            )
                .chain()
                .in_set(GameSet::Collision),
        )
        .add_systems(Update, systems::update_damage_flash.in_set(GameSet::Feedback));
    }
}
