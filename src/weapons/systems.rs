//! Weapon systems - firing volleys and showing slot collars.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::arsenal::Arsenal;
use super::definition::WeaponType;
use crate::combat::Projectile;
use crate::core::{Faction, FireWeapons};
use crate::world::{sensor_collider, SceneEntity};

pub const PROJECTILE_RADIUS: f32 = 0.5;

/// Visual for one weapon slot. Hidden while the slot is disabled.
#[derive(Component, Debug, Clone, Copy)]
pub struct SlotCollar {
    pub index: usize,
}

/// Fire every slot of a ship at time `now`. Returns the projectile count.
pub fn fire_volley(
    commands: &mut Commands,
    transform: &Transform,
    arsenal: &mut Arsenal,
    faction: Faction,
    now: f32,
) -> usize {
    let mut fired = 0;
    for slot in arsenal.slots.iter_mut() {
        let mount_up = transform.rotation * slot.facing.local_up();
        let mut origin = transform.transform_point(slot.offset);
        origin.z = 0.0;
        let kind = slot.kind();
        let color = slot.definition().projectile_color();

        for velocity in slot.fire(now, mount_up) {
            spawn_projectile(commands, origin, velocity, kind, faction, color);
            fired += 1;
        }
    }
    fired
}

/// Spawn one projectile moving at `velocity`.
pub fn spawn_projectile(
    commands: &mut Commands,
    origin: Vec3,
    velocity: Vec3,
    kind: WeaponType,
    faction: Faction,
    color: Color,
) -> Entity {
    let rotation = if velocity.length_squared() > 0.0 {
        Quat::from_rotation_arc(Vec3::Y, velocity.normalize())
    } else {
        Quat::IDENTITY
    };

    commands
        .spawn((
            Projectile { kind, faction },
            Sprite {
                color,
                custom_size: Some(Vec2::new(PROJECTILE_RADIUS, PROJECTILE_RADIUS * 3.0)),
                ..default()
            },
            Transform::from_translation(origin).with_rotation(rotation),
            RigidBody::KinematicVelocityBased,
            Velocity::linear(velocity),
            sensor_collider(Collider::ball(PROJECTILE_RADIUS)),
            SceneEntity,
        ))
        .id()
}

/// Spawn a hidden collar for every slot of an arsenal.
pub fn spawn_slot_collars(parent: &mut ChildBuilder, arsenal: &Arsenal) {
    for (index, slot) in arsenal.slots.iter().enumerate() {
        parent.spawn((
            SlotCollar { index },
            Sprite {
                color: slot.definition().color(),
                custom_size: Some(Vec2::splat(0.8)),
                ..default()
            },
            Transform::from_translation(slot.offset + Vec3::Z * 0.1),
            Visibility::Hidden,
        ));
    }
}

/// Answer `FireWeapons` requests with a volley from the named ship.
pub fn fire_on_request(
    mut commands: Commands,
    time: Res<Time>,
    mut requests: EventReader<FireWeapons>,
    mut ships: Query<(&Transform, &mut Arsenal, &Faction)>,
) {
    let now = time.elapsed_secs();
    for request in requests.read() {
        let Ok((transform, mut arsenal, faction)) = ships.get_mut(request.ship) else {
            continue;
        };
        fire_volley(&mut commands, transform, &mut arsenal, *faction, now);
    }
}

/// Show active slots in their weapon's color and hide disabled ones.
pub fn sync_slot_collars(
    arsenals: Query<&Arsenal, Changed<Arsenal>>,
    mut collars: Query<(&SlotCollar, &Parent, &mut Sprite, &mut Visibility)>,
) {
    for (collar, parent, mut sprite, mut visibility) in collars.iter_mut() {
        let Ok(arsenal) = arsenals.get(parent.get()) else {
            continue;
        };
        let Some(slot) = arsenal.slots.get(collar.index) else {
            continue;
        };

        if slot.is_active() {
            *visibility = Visibility::Inherited;
            sprite.color = slot.definition().color();
        } else {
            *visibility = Visibility::Hidden;
        }
    }
}
