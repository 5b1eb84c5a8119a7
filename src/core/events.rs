//! Global events used for cross-system communication.
//!
//! Firing, destruction and pickups cross module boundaries as events so the
//! weapon, enemy, power-up and player systems stay independent of each other.

use bevy::prelude::*;

use crate::weapons::WeaponType;

/// Which side fired a projectile.
///
/// Hero projectiles damage enemies, enemy projectiles drain the hero's shield.
/// Ships carry it as a component so their volleys are tagged correctly.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Faction {
    Hero,
    Enemy,
}

/// Sent by a ship to ask every weapon slot it carries to fire.
///
/// Slots listen simply by living in the [`Arsenal`](crate::weapons::Arsenal)
/// of the named ship.
#[derive(Event, Debug, Clone, Copy)]
pub struct FireWeapons {
    pub ship: Entity,
}

/// Sent exactly once when an enemy is destroyed by weapon fire.
#[derive(Event, Debug, Clone)]
pub struct EnemyDestroyed {
    /// The enemy entity (despawned by the time most readers run)
    pub entity: Entity,
    /// Last known position, used to place dropped power-ups
    pub position: Vec3,
    /// Points awarded for the kill
    pub score: u32,
    /// Probability in [0, 1] that a power-up is dropped
    pub drop_chance: f32,
}

/// Sent when the hero's shield is driven below zero.
#[derive(Event, Debug, Clone, Copy)]
pub struct HeroDestroyed {
    pub hero: Entity,
}

/// Sent when the hero picks up a power-up.
#[derive(Event, Debug, Clone, Copy)]
pub struct PowerUpAbsorbed {
    pub hero: Entity,
    pub kind: WeaponType,
}
