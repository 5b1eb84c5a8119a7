//! Player plugin - hero spawning, input and contacts.

use bevy::prelude::*;

use super::contacts::handle_hero_contacts;
use super::movement::{hero_fire_input, hero_movement};
use super::spawning::{spawn_hero, update_shield_visual};
use crate::combat::handle_projectile_hits;
use crate::core::{GameSet, GameState};

/// Player plugin.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::InGame), spawn_hero)
            .add_systems(Update, (hero_movement, hero_fire_input).in_set(GameSet::Input))
            .add_systems(
                Update,
                handle_hero_contacts
                    .after(handle_projectile_hits)
                    .in_set(GameSet::Collision),
            )
            .add_systems(Update, update_shield_visual.in_set(GameSet::Feedback));
    }
}
