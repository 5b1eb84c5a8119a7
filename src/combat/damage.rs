//! Damage resolution for enemies hit by hero projectiles.
//!
//! These functions hold the rules and nothing else: the collision systems
//! look up the components, call in here, then act on the [`HitOutcome`].
//! Every outcome consumes the projectile.

use bevy::prelude::*;

use super::components::{Destruction, Hull};
use super::parts::Parts;

/// Result of one projectile contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Enemy was outside the play bounds; no damage dealt
    OffScreen,
    /// Contact did not resolve to a live part
    Missed,
    /// A protector absorbed the hit
    Blocked,
    /// Damage applied, target still alive
    Damaged,
    /// A part was knocked out but the enemy lives on
    PartDestroyed(Option<Entity>),
    /// The enemy just transitioned to destroyed; report it
    Destroyed,
}

impl HitOutcome {
    /// Whether damage was dealt.
    pub fn dealt_damage(&self) -> bool {
        matches!(
            self,
            HitOutcome::Damaged | HitOutcome::PartDestroyed(_) | HitOutcome::Destroyed
        )
    }
}

/// Resolve a hit on a single-body enemy.
pub fn resolve_hull_hit(
    hull: &mut Hull,
    state: &mut Destruction,
    on_screen: bool,
    damage: f32,
) -> HitOutcome {
    if !on_screen {
        return HitOutcome::OffScreen;
    }

    hull.take_damage(damage);
    if hull.is_destroyed() && state.destroy() {
        HitOutcome::Destroyed
    } else {
        HitOutcome::Damaged
    }
}

/// Resolve a hit on a multi-part enemy.
///
/// The physics layer may report either body as "this" side of a contact,
/// so `primary` is tried first and `alternate` second.
pub fn resolve_part_hit(
    parts: &mut Parts,
    state: &mut Destruction,
    on_screen: bool,
    primary: Entity,
    alternate: Entity,
    damage: f32,
) -> HitOutcome {
    if !on_screen {
        return HitOutcome::OffScreen;
    }

    let Some(index) = parts
        .index_of_entity(primary)
        .or_else(|| parts.index_of_entity(alternate))
    else {
        return HitOutcome::Missed;
    };

    if parts.parts[index].is_destroyed() {
        return HitOutcome::Missed;
    }

    if parts.is_shielded(index) {
        return HitOutcome::Blocked;
    }

    let part = &mut parts.parts[index];
    part.health -= damage;
    let knocked_out = part.is_destroyed().then_some(part.entity);

    if parts.all_destroyed() && state.destroy() {
        return HitOutcome::Destroyed;
    }

    match knocked_out {
        Some(entity) => HitOutcome::PartDestroyed(entity),
        None => HitOutcome::Damaged,
    }
}
