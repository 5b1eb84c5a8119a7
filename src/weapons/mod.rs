//! Weapons module - weapon definitions, slots and fire control.

mod arsenal;
mod definition;
mod plugin;
mod registry;
mod slot;
mod systems;

pub use arsenal::{Arsenal, PickupResult};
pub use definition::{FirePattern, WeaponDefinition, WeaponType, SPREAD_ANGLE_DEGREES};
pub use plugin::WeaponsPlugin;
pub use registry::{load_weapon_registry, WeaponRegistry, WEAPONS_PATH};
pub use slot::{spread_velocities, Facing, WeaponSlot};
pub use systems::{
    fire_on_request, fire_volley, spawn_projectile, spawn_slot_collars, sync_slot_collars,
    SlotCollar, PROJECTILE_RADIUS,
};
