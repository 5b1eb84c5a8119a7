//! Weapon types and their static definitions.

use bevy::prelude::*;
use serde::Deserialize;

/// Every kind of weapon, plus `Shield` for the shield power-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum WeaponType {
    /// No weapon; a slot with this type is disabled
    #[default]
    None,
    /// Single forward shot
    Blaster,
    /// Three shots fanned out by ±10°
    Spread,
    /// Wave shots (fires like a blaster for now)
    Phaser,
    /// Homing missiles (fires like a blaster for now)
    Missile,
    /// Damage over time (fires like a blaster for now)
    Laser,
    /// Raises the shield level when picked up; never fires
    Shield,
}

/// How a weapon turns one trigger pull into projectiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirePattern {
    /// Nothing is fired
    Silent,
    /// One projectile along the mount's forward axis
    Single,
    /// Forward plus one on each side rotated by [`SPREAD_ANGLE_DEGREES`]
    Spread,
}

/// Fixed angle between the centre shot and each side shot of a spread.
pub const SPREAD_ANGLE_DEGREES: f32 = 10.0;

impl WeaponType {
    pub fn fire_pattern(self) -> FirePattern {
        match self {
            WeaponType::None | WeaponType::Shield => FirePattern::Silent,
            WeaponType::Spread => FirePattern::Spread,
            WeaponType::Blaster | WeaponType::Phaser | WeaponType::Missile | WeaponType::Laser => {
                FirePattern::Single
            }
        }
    }
}

/// Static data describing one weapon type, loaded from `weapons.ron`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeaponDefinition {
    pub kind: WeaponType,
    /// Letter shown on the power-up and the HUD
    #[serde(default)]
    pub letter: String,
    /// Color of the slot collar and power-up
    #[serde(default = "white")]
    pub color: (f32, f32, f32),
    #[serde(default = "white")]
    pub projectile_color: (f32, f32, f32),
    #[serde(default)]
    pub damage_on_hit: f32,
    /// Damage per second (laser)
    #[serde(default)]
    pub continuous_damage: f32,
    #[serde(default)]
    pub delay_between_shots: f32,
    /// Projectile speed in units per second
    #[serde(default)]
    pub velocity: f32,
}

fn white() -> (f32, f32, f32) {
    (1.0, 1.0, 1.0)
}

impl Default for WeaponDefinition {
    /// The "none" definition: harmless, silent, white.
    fn default() -> Self {
        Self {
            kind: WeaponType::None,
            letter: String::new(),
            color: white(),
            projectile_color: white(),
            damage_on_hit: 0.0,
            continuous_damage: 0.0,
            delay_between_shots: 0.0,
            velocity: 0.0,
        }
    }
}

impl WeaponDefinition {
    pub fn color(&self) -> Color {
        Color::srgb(self.color.0, self.color.1, self.color.2)
    }

    pub fn projectile_color(&self) -> Color {
        Color::srgb(
            self.projectile_color.0,
            self.projectile_color.1,
            self.projectile_color.2,
        )
    }
}
