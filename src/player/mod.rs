//! Player module - the hero ship, its shield and its controls.

mod components;
mod contacts;
mod movement;
mod pickup;
mod plugin;
mod spawning;

pub use components::*;
pub use contacts::handle_hero_contacts;
pub use movement::{hero_fire_input, hero_movement, input_axes, tilt};
pub use pickup::{absorb_power_up, PickupEffect};
pub use plugin::PlayerPlugin;
pub use spawning::{hero_arsenal, spawn_hero, update_shield_visual, SHIELD_ALPHA_PER_LEVEL};
