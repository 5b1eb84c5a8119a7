//! Enemy behavior systems.

use bevy::prelude::*;

use super::components::Enemy;
use super::movement::Movement;
use crate::core::Faction;
use crate::weapons::{fire_volley, Arsenal};
use crate::world::PlayBounds;

/// Advance every enemy along its movement strategy.
pub fn move_enemies(
    time: Res<Time>,
    bounds: Res<PlayBounds>,
    mut query: Query<(&mut Transform, &mut Movement, &Enemy)>,
) {
    let now = time.elapsed_secs();
    let dt = time.delta_secs();
    let mut rng = rand::thread_rng();

    for (mut transform, mut movement, enemy) in query.iter_mut() {
        let radius = enemy.radius;
        transform.translation = movement.step(transform.translation, now, dt, || {
            bounds.random_point(radius, &mut rng)
        });
    }
}

/// Remove enemies that slipped past the bottom edge. No score, no drop.
pub fn despawn_escaped_enemies(
    mut commands: Commands,
    bounds: Res<PlayBounds>,
    query: Query<(Entity, &Transform, &Enemy)>,
) {
    for (entity, transform, enemy) in query.iter() {
        if bounds.is_below(transform.translation, enemy.radius) {
            commands.entity(entity).despawn_recursive();
        }
    }
}

/// Armed enemies fire whenever they are on screen and their slot is ready.
pub fn enemy_fire(
    mut commands: Commands,
    time: Res<Time>,
    bounds: Res<PlayBounds>,
    mut query: Query<(&Transform, &mut Arsenal, &Faction), With<Enemy>>,
) {
    let now = time.elapsed_secs();
    for (transform, mut arsenal, faction) in query.iter_mut() {
        if bounds.is_on_screen(transform.translation, 0.0) {
            fire_volley(&mut commands, transform, &mut arsenal, *faction, now);
        }
    }
}
