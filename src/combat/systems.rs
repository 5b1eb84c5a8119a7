//! Combat systems - projectile hits, bounds and damage feedback.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use std::collections::HashSet;

use super::components::*;
use super::damage::{resolve_hull_hit, resolve_part_hit, HitOutcome};
use super::parts::Parts;
use crate::core::GameConfig;
use crate::enemies::Enemy;
use crate::weapons::{WeaponRegistry, PROJECTILE_RADIUS};
use crate::world::PlayBounds;

/// Follow `Parent` links up to the root entity.
pub fn root_of(entity: Entity, parents: &Query<&Parent>) -> Entity {
    let mut current = entity;
    while let Ok(parent) = parents.get(current) {
        current = parent.get();
    }
    current
}

/// Apply hero projectile contacts to enemies.
///
/// Several contacts can arrive for one projectile in a single frame; only
/// the first is applied and the projectile is consumed by every outcome.
#[allow(clippy::too_many_arguments)]
pub fn handle_projectile_hits(
    mut commands: Commands,
    mut collisions: EventReader<CollisionEvent>,
    projectiles: Query<&Projectile>,
    parents: Query<&Parent>,
    mut enemies: Query<(
        &Transform,
        &Enemy,
        &mut Destruction,
        Option<&mut Hull>,
        Option<&mut Parts>,
    )>,
    mut sprites: Query<(&BaseColor, &mut Sprite)>,
    registry: Res<WeaponRegistry>,
    bounds: Res<PlayBounds>,
    config: Res<GameConfig>,
    mut destroyed: EventWriter<EnemyDestroyed>,
) {
    let mut consumed = HashSet::new();

    for event in collisions.read() {
        let CollisionEvent::Started(a, b, _) = event else {
            continue;
        };
        let (a, b) = (*a, *b);

        let (shot, struck) = match (projectiles.get(a), projectiles.get(b)) {
            (Ok(p), Err(_)) => ((a, *p), b),
            (Err(_), Ok(p)) => ((b, *p), a),
            _ => continue,
        };
        let (shot_entity, projectile) = shot;
        if projectile.faction != Faction::Hero || consumed.contains(&shot_entity) {
            continue;
        }

        let root = root_of(struck, &parents);
        let Ok((transform, enemy, mut state, hull, parts)) = enemies.get_mut(root) else {
            continue;
        };

        consumed.insert(shot_entity);
        commands.entity(shot_entity).despawn_recursive();

        if state.is_destroyed() {
            continue;
        }

        let damage = registry.lookup(projectile.kind).damage_on_hit;
        let on_screen = bounds.is_on_screen(transform.translation, 0.0);
        let outcome = match (parts, hull) {
            (Some(mut parts), _) => resolve_part_hit(&mut parts, &mut state, on_screen, a, b, damage),
            (None, Some(mut hull)) => resolve_hull_hit(&mut hull, &mut state, on_screen, damage),
            (None, None) => {
                warn!("Enemy {:?} has neither hull nor parts", root);
                continue;
            }
        };

        match outcome {
            HitOutcome::Destroyed => {
                destroyed.send(EnemyDestroyed {
                    entity: root,
                    position: transform.translation,
                    score: enemy.score,
                    drop_chance: enemy.drop_chance,
                });
                commands.entity(root).despawn_recursive();
            }
            HitOutcome::PartDestroyed(part) => {
                debug!("Enemy {:?} lost part {:?}", root, part);
                if let Some(part) = part {
                    commands
                        .entity(part)
                        .insert(Visibility::Hidden)
                        .remove::<Collider>();
                }
            }
            HitOutcome::Blocked => debug!("Hit on {:?} blocked by a protector", struck),
            _ if outcome.dealt_damage() => {
                if let Ok((_, mut sprite)) = sprites.get_mut(struck) {
                    sprite.color = DamageFlash::COLOR;
                    commands
                        .entity(struck)
                        .insert(DamageFlash::new(config.damage_flash_duration));
                }
            }
            _ => {}
        }
    }
}

/// Remove projectiles that have fully left the play field.
pub fn despawn_offscreen_projectiles(
    mut commands: Commands,
    bounds: Res<PlayBounds>,
    query: Query<(Entity, &Transform), With<Projectile>>,
) {
    for (entity, transform) in query.iter() {
        if !bounds.is_on_screen(transform.translation, -PROJECTILE_RADIUS) {
            commands.entity(entity).despawn_recursive();
        }
    }
}

/// Restore flashed sprites to their base color.
pub fn update_damage_flash(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut DamageFlash, &BaseColor, &mut Sprite)>,
) {
    for (entity, mut flash, base, mut sprite) in query.iter_mut() {
        if flash.timer.tick(time.delta()).finished() {
            sprite.color = base.0;
            commands.entity(entity).remove::<DamageFlash>();
        }
    }
}
