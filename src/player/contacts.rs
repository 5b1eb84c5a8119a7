//! Hero trigger contacts: enemies, enemy fire and power-ups.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::{Hero, LastContact, ShieldChange, ShieldLevel};
use super::pickup::absorb_power_up;
use crate::combat::{root_of, Destruction, Projectile};
use crate::core::{Faction, HeroDestroyed, PowerUpAbsorbed};
use crate::economy::PowerUp;
use crate::enemies::Enemy;
use crate::weapons::{Arsenal, WeaponRegistry};

/// What the hero touched.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Contact {
    Enemy,
    EnemyFire,
    PowerUp,
    Other,
}

/// Resolve everything the hero touched this frame.
///
/// Enemies that ram the hero are removed without score or drops. An enemy
/// already destroyed by weapon fire in the same frame is ignored.
#[allow(clippy::too_many_arguments)]
pub fn handle_hero_contacts(
    mut commands: Commands,
    mut collisions: EventReader<CollisionEvent>,
    mut heroes: Query<(&mut ShieldLevel, &mut LastContact, &mut Arsenal), With<Hero>>,
    parents: Query<&Parent>,
    mut enemies: Query<&mut Destruction, With<Enemy>>,
    projectiles: Query<&Projectile>,
    power_ups: Query<&PowerUp>,
    registry: Res<WeaponRegistry>,
    mut absorbed: EventWriter<PowerUpAbsorbed>,
    mut hero_destroyed: EventWriter<HeroDestroyed>,
) {
    for event in collisions.read() {
        let CollisionEvent::Started(a, b, _) = event else {
            continue;
        };
        let (hero, other) = if heroes.contains(*a) {
            (*a, *b)
        } else if heroes.contains(*b) {
            (*b, *a)
        } else {
            continue;
        };
        let Ok((mut shield, mut last, mut arsenal)) = heroes.get_mut(hero) else {
            continue;
        };

        let root = root_of(other, &parents);
        let contact = if enemies.contains(root) {
            Contact::Enemy
        } else if let Ok(projectile) = projectiles.get(root) {
            if projectile.faction == Faction::Hero {
                continue;
            }
            Contact::EnemyFire
        } else if power_ups.contains(root) {
            Contact::PowerUp
        } else {
            Contact::Other
        };

        if last.0 == Some(root) {
            continue;
        }
        last.0 = Some(root);

        let change = match contact {
            Contact::Enemy => {
                let rammed = enemies
                    .get_mut(root)
                    .is_ok_and(|mut state| state.destroy());
                // Already shot down this frame; the wreck costs no shield.
                if rammed {
                    commands.entity(root).despawn_recursive();
                    Some(shield.lower())
                } else {
                    None
                }
            }
            Contact::EnemyFire => {
                commands.entity(root).despawn_recursive();
                Some(shield.lower())
            }
            Contact::PowerUp => {
                if let Ok(power_up) = power_ups.get(root) {
                    let effect = absorb_power_up(power_up.kind, &mut shield, &mut arsenal, &registry);
                    debug!("Hero absorbed {:?}: {:?}", power_up.kind, effect);
                    absorbed.send(PowerUpAbsorbed {
                        hero,
                        kind: power_up.kind,
                    });
                    commands.entity(root).despawn_recursive();
                }
                None
            }
            Contact::Other => {
                warn!("Hero touched unexpected body {:?}", root);
                None
            }
        };

        if change == Some(ShieldChange::Depleted) {
            hero_destroyed.send(HeroDestroyed { hero });
            commands.entity(hero).despawn_recursive();
            return;
        }
    }
}
