//! Enemy-related components.

use bevy::prelude::*;

/// Scoring and drop data shared by every enemy.
#[derive(Component, Debug, Clone)]
pub struct Enemy {
    /// Points earned for destroying this enemy
    pub score: u32,
    /// Probability in [0, 1] of dropping a power-up
    pub drop_chance: f32,
    /// Body radius used for bounds tests and spawn padding
    pub radius: f32,
}
