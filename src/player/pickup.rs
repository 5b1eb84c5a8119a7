//! Power-up absorption rules.

use super::components::{ShieldChange, ShieldLevel};
use crate::weapons::{Arsenal, PickupResult, WeaponRegistry, WeaponType};

/// What absorbing a power-up did to the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupEffect {
    Shield(ShieldChange),
    Weapon(PickupResult),
}

/// Shield power-ups raise the shield, anything else goes to the arsenal.
pub fn absorb_power_up(
    kind: WeaponType,
    shield: &mut ShieldLevel,
    arsenal: &mut Arsenal,
    registry: &WeaponRegistry,
) -> PickupEffect {
    match kind {
        WeaponType::Shield => PickupEffect::Shield(shield.raise()),
        _ => PickupEffect::Weapon(arsenal.absorb_weapon(kind, registry)),
    }
}
