//! Fire control for a single weapon mount.

use bevy::prelude::*;

use super::definition::{FirePattern, WeaponDefinition, WeaponType, SPREAD_ANGLE_DEGREES};
use super::registry::WeaponRegistry;

/// Which way a mount points in its ship's local space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
pub enum Facing {
    /// Fires toward +Y (hero mounts)
    #[default]
    Up,
    /// Fires toward -Y (enemy mounts)
    Down,
}

impl Facing {
    pub fn local_up(self) -> Vec3 {
        match self {
            Facing::Up => Vec3::Y,
            Facing::Down => Vec3::NEG_Y,
        }
    }
}

/// One weapon slot on a ship.
///
/// A slot is Disabled while its type is `None` and Active otherwise.
#[derive(Debug, Clone)]
pub struct WeaponSlot {
    kind: WeaponType,
    definition: WeaponDefinition,
    /// `None` right after a type change so the next shot is never blocked
    last_shot: Option<f32>,
    /// Mount position relative to the ship
    pub offset: Vec3,
    pub facing: Facing,
}

impl WeaponSlot {
    pub fn new(offset: Vec3, facing: Facing) -> Self {
        Self {
            kind: WeaponType::None,
            definition: WeaponDefinition::default(),
            last_shot: None,
            offset,
            facing,
        }
    }

    pub fn kind(&self) -> WeaponType {
        self.kind
    }

    pub fn definition(&self) -> &WeaponDefinition {
        &self.definition
    }

    pub fn is_active(&self) -> bool {
        self.kind != WeaponType::None
    }

    pub fn last_shot(&self) -> Option<f32> {
        self.last_shot
    }

    /// Change the slot's weapon. Entering any active type resets the cooldown.
    pub fn set_type(&mut self, kind: WeaponType, registry: &WeaponRegistry) {
        self.kind = kind;
        if kind == WeaponType::None {
            self.definition = WeaponDefinition::default();
            return;
        }
        self.definition = registry.lookup(kind).clone();
        self.last_shot = None;
    }

    /// Whether a shot at `now` would pass the cooldown.
    pub fn ready(&self, now: f32) -> bool {
        match self.last_shot {
            Some(last) => now - last >= self.definition.delay_between_shots,
            None => true,
        }
    }

    /// Try to fire at time `now`.
    ///
    /// `mount_up` is the mount's up axis in world space; a downward pointing
    /// mount fires downward. Returns one velocity per projectile to spawn,
    /// empty when the slot is disabled, silent, unregistered or cooling down.
    pub fn fire(&mut self, now: f32, mount_up: Vec3) -> Vec<Vec3> {
        // A type missing from the registry carries the zero "none" definition.
        if !self.is_active() || self.definition.kind == WeaponType::None || !self.ready(now) {
            return Vec::new();
        }

        let mut forward = Vec3::Y * self.definition.velocity;
        if mount_up.y < 0.0 {
            forward.y = -forward.y;
        }

        let velocities = match self.kind.fire_pattern() {
            FirePattern::Silent => return Vec::new(),
            FirePattern::Single => vec![forward],
            FirePattern::Spread => spread_velocities(forward).to_vec(),
        };

        self.last_shot = Some(now);
        velocities
    }
}

/// The centre shot plus the two side shots rotated about the depth axis.
pub fn spread_velocities(forward: Vec3) -> [Vec3; 3] {
    let angle = SPREAD_ANGLE_DEGREES.to_radians();
    [
        forward,
        Quat::from_axis_angle(Vec3::NEG_Z, angle) * forward,
        Quat::from_axis_angle(Vec3::NEG_Z, -angle) * forward,
    ]
}
