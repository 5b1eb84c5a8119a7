//! Weighted power-up drops.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::weapons::{WeaponRegistry, WeaponType};

/// Roll `drop_chance`, then pick one entry of `frequency`.
///
/// Entries repeat to weight the pick. An empty list never drops.
pub fn roll_drop(frequency: &[WeaponType], drop_chance: f32, rng: &mut impl Rng) -> Option<WeaponType> {
    if drop_chance <= 0.0 || rng.gen::<f32>() >= drop_chance {
        return None;
    }
    frequency.choose(rng).copied()
}

/// Frequency entries that have no weapon definition, in list order.
///
/// `Shield` never fires, so it only needs to be known to the pickup rule.
pub fn unregistered_drops(frequency: &[WeaponType], registry: &WeaponRegistry) -> Vec<WeaponType> {
    let mut missing = Vec::new();
    for kind in frequency {
        if *kind != WeaponType::Shield && !registry.contains(*kind) && !missing.contains(kind) {
            missing.push(*kind);
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_chance_never_drops() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            assert_eq!(roll_drop(&[WeaponType::Blaster], 0.0, &mut rng), None);
        }
    }

    #[test]
    fn certain_drop_picks_from_list() {
        let list = [WeaponType::Blaster, WeaponType::Spread, WeaponType::Shield];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let kind = roll_drop(&list, 1.0, &mut rng).unwrap();
            assert!(list.contains(&kind));
        }
    }

    #[test]
    fn empty_list_never_drops() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(roll_drop(&[], 1.0, &mut rng), None);
    }

    #[test]
    fn reports_each_unregistered_entry_once() {
        let registry = WeaponRegistry::builtin();
        let list = [
            WeaponType::Blaster,
            WeaponType::Missile,
            WeaponType::Shield,
            WeaponType::Missile,
            WeaponType::Laser,
        ];
        assert_eq!(
            unregistered_drops(&list, &registry),
            vec![WeaponType::Missile, WeaponType::Laser]
        );
        assert!(unregistered_drops(&[WeaponType::Blaster, WeaponType::Spread], &registry).is_empty());
    }

    #[test]
    fn repeated_entries_weight_the_pick() {
        let list = [WeaponType::Blaster, WeaponType::Blaster, WeaponType::Blaster, WeaponType::Shield];
        let mut rng = StdRng::seed_from_u64(11);
        let blasters = (0..4000)
            .filter(|_| roll_drop(&list, 1.0, &mut rng) == Some(WeaponType::Blaster))
            .count();
        assert!((2700..3300).contains(&blasters), "got {blasters}");
    }
}
