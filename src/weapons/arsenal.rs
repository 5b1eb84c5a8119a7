//! The set of weapon slots carried by one ship.

use bevy::prelude::*;

use super::definition::WeaponType;
use super::registry::WeaponRegistry;
use super::slot::{Facing, WeaponSlot};

/// Weapon slots of a ship. Slot 0 is the primary.
#[derive(Component, Debug, Clone, Default)]
pub struct Arsenal {
    pub slots: Vec<WeaponSlot>,
}

/// What a weapon pickup did to an arsenal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupResult {
    /// Same type as the primary: filled the slot at this index
    Stacked(usize),
    /// Same type as the primary but every slot is taken
    Full,
    /// Different type: all slots cleared, primary now holds the new type
    Replaced,
}

impl Arsenal {
    /// Build an arsenal with one disabled slot per mount offset.
    pub fn with_mounts(offsets: &[Vec3], facing: Facing) -> Self {
        Self {
            slots: offsets
                .iter()
                .map(|offset| WeaponSlot::new(*offset, facing))
                .collect(),
        }
    }

    /// Type of the primary slot (`None` for an empty arsenal).
    pub fn primary(&self) -> WeaponType {
        self.slots
            .first()
            .map_or(WeaponType::None, WeaponSlot::kind)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    pub fn clear(&mut self, registry: &WeaponRegistry) {
        for slot in &mut self.slots {
            slot.set_type(WeaponType::None, registry);
        }
    }

    /// Apply a weapon power-up.
    ///
    /// Matching the primary fills the first empty slot, anything else
    /// replaces the whole loadout with a single slot of the new type.
    pub fn absorb_weapon(&mut self, kind: WeaponType, registry: &WeaponRegistry) -> PickupResult {
        if kind == self.primary() {
            return match self.slots.iter().position(|s| !s.is_active()) {
                Some(index) => {
                    self.slots[index].set_type(kind, registry);
                    PickupResult::Stacked(index)
                }
                None => PickupResult::Full,
            };
        }

        self.clear(registry);
        if let Some(primary) = self.slots.first_mut() {
            primary.set_type(kind, registry);
        }
        PickupResult::Replaced
    }
}
