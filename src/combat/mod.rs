//! Combat module - projectiles, damage resolution and enemy parts.

mod components;
mod damage;
mod parts;
mod plugin;
mod systems;

pub use components::*;
pub use damage::{resolve_hull_hit, resolve_part_hit, HitOutcome};
pub use parts::{Part, Parts};
pub use plugin::CombatPlugin;
pub use systems::{despawn_offscreen_projectiles, handle_projectile_hits, root_of, update_damage_flash};
