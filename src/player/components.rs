//! Player-related components.

use bevy::prelude::*;

/// Marker component for the hero ship.
#[derive(Component)]
pub struct Hero;

/// Highest shield level the hero can hold.
pub const MAX_SHIELD_LEVEL: i32 = 4;

/// Result of changing the shield level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShieldChange {
    /// Level is now the contained value
    Changed(i32),
    /// Shield was driven below zero; the hero is destroyed
    Depleted,
}

/// The hero's shield. Stored level is always within `0..=MAX_SHIELD_LEVEL`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShieldLevel(i32);

impl ShieldLevel {
    pub fn new(level: i32) -> Self {
        Self(level.clamp(0, MAX_SHIELD_LEVEL))
    }

    pub fn level(&self) -> i32 {
        self.0
    }

    pub fn set_level(&mut self, value: i32) -> ShieldChange {
        self.0 = value.clamp(0, MAX_SHIELD_LEVEL);
        if value < 0 {
            ShieldChange::Depleted
        } else {
            ShieldChange::Changed(self.0)
        }
    }

    pub fn raise(&mut self) -> ShieldChange {
        self.set_level(self.0 + 1)
    }

    pub fn lower(&mut self) -> ShieldChange {
        self.set_level(self.0 - 1)
    }
}

/// Root entity of the hero's previous contact; a repeat is ignored.
#[derive(Component, Debug, Default)]
pub struct LastContact(pub Option<Entity>);

/// Rotating shield visual; opacity follows the shield level.
#[derive(Component, Debug)]
pub struct ShieldVisual {
    pub rotations_per_second: f32,
    pub level_shown: Option<i32>,
}
