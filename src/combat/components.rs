//! Combat-related components.

use bevy::prelude::*;

pub use crate::core::{EnemyDestroyed, Faction};
use crate::weapons::WeaponType;

/// A projectile in flight. Its weapon type decides damage and color.
#[derive(Component, Debug, Clone, Copy)]
pub struct Projectile {
    pub kind: WeaponType,
    pub faction: Faction,
}

/// Life cycle of anything that must report its destruction once.
///
/// The only transition is `Alive -> Destroyed`; it can't be undone.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Destruction {
    #[default]
    Alive,
    Destroyed,
}

impl Destruction {
    /// Move to `Destroyed`. Returns `true` only for the call that actually
    /// made the transition, so side effects hang off the return value.
    pub fn destroy(&mut self) -> bool {
        match self {
            Destruction::Alive => {
                *self = Destruction::Destroyed;
                true
            }
            Destruction::Destroyed => false,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        *self == Destruction::Destroyed
    }
}

/// Hit points of a single-body enemy.
#[derive(Component, Debug, Clone, Copy)]
pub struct Hull {
    pub health: f32,
}

impl Hull {
    pub fn new(health: f32) -> Self {
        Self { health }
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.health -= amount;
    }

    pub fn is_destroyed(&self) -> bool {
        self.health <= 0.0
    }
}

/// Resting color of a sprite that can flash.
#[derive(Component, Debug, Clone, Copy)]
pub struct BaseColor(pub Color);

/// Temporary recolor shown after taking damage; reverts to [`BaseColor`].
#[derive(Component, Debug, Clone)]
pub struct DamageFlash {
    pub timer: Timer,
}

impl DamageFlash {
    pub const COLOR: Color = Color::srgb(1.0, 0.1, 0.1);

    pub fn new(duration: f32) -> Self {
        Self {
            timer: Timer::from_seconds(duration, TimerMode::Once),
        }
    }
}
