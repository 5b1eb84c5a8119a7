//! Space Shmup - a vertical scrolling space shooter in Bevy.
//!
//! The hero ship flies at the bottom of a fixed play field while enemies
//! descend from the top. Destroyed enemies award score and may drop
//! power-ups that change the hero's weapons or raise its shield.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, configuration, game flow
//! - **World**: Camera, play bounds, scene lifetime
//! - **Weapons**: Weapon registry, slots, fire control
//! - **Combat**: Projectile hits, single-body and multi-part damage
//! - **Enemies**: Enemy definitions, movement, spawning
//! - **Economy**: Score and power-up drops
//! - **Player**: Hero movement, shield, contacts
//! - **UI**: HUD

pub mod combat;
pub mod core;
pub mod economy;
pub mod enemies;
pub mod player;
pub mod ui;
pub mod weapons;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct ShmupPlugin;

impl Plugin for ShmupPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            .add_plugins(world::WorldPlugin)
            .add_plugins(weapons::WeaponsPlugin)
            .add_plugins(combat::CombatPlugin)
            .add_plugins(enemies::EnemyPlugin)
            .add_plugins(economy::EconomyPlugin)
            .add_plugins(player::PlayerPlugin)
            .add_plugins(ui::UiPlugin);
    }
}
