//! Weapons plugin - weapon registry, firing and slot visuals.

use bevy::prelude::*;

use super::registry::load_weapon_registry;
use super::systems;
use crate::core::GameSet;

/// Weapons plugin - handles all weapon systems.
pub struct WeaponsPlugin;

impl Plugin for WeaponsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_weapon_registry)
            .add_systems(Update, systems::fire_on_request.in_set(GameSet::Firing))
            .add_systems(Update, systems::sync_slot_collars.in_set(GameSet::Feedback));
    }
}
