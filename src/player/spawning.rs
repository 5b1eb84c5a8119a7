//! Hero spawning.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::{Hero, LastContact, ShieldLevel, ShieldVisual};
use crate::core::{Faction, GameConfig};
use crate::weapons::{spawn_slot_collars, Arsenal, Facing, WeaponRegistry};
use crate::world::{sensor_collider, PlayBounds, SceneEntity};

const HERO_COLOR: Color = Color::srgb(0.3, 0.7, 1.0);
const SHIELD_COLOR: Color = Color::srgba(0.4, 0.9, 1.0, 0.0);

/// Opacity of the shield visual per shield level.
pub const SHIELD_ALPHA_PER_LEVEL: f32 = 0.15;

/// Build the hero's arsenal: every mount empty except slot 0.
pub fn hero_arsenal(config: &GameConfig, registry: &WeaponRegistry) -> Arsenal {
    let mut arsenal = Arsenal::with_mounts(&config.weapon_mount_offsets(), Facing::Up);
    if let Some(slot) = arsenal.slots.first_mut() {
        slot.set_type(config.starting_weapon, registry);
    }
    arsenal
}

/// Spawn the hero near the bottom of the play field.
pub fn spawn_hero(
    mut commands: Commands,
    config: Res<GameConfig>,
    registry: Res<WeaponRegistry>,
    bounds: Res<PlayBounds>,
    existing: Query<Entity, With<Hero>>,
) {
    if let Ok(hero) = existing.get_single() {
        warn!("Hero {:?} already exists, not spawning another", hero);
        return;
    }

    if !registry.contains(config.starting_weapon) {
        warn!("Starting weapon {:?} has no definition", config.starting_weapon);
    }
    let arsenal = hero_arsenal(&config, &registry);
    let radius = config.hero_radius;
    let position = Vec3::new(0.0, -bounds.half_height / 2.0, 0.0);

    let hero = commands
        .spawn((
            Hero,
            Faction::Hero,
            ShieldLevel::new(config.starting_shield),
            LastContact::default(),
            Sprite {
                color: HERO_COLOR,
                custom_size: Some(Vec2::new(radius * 1.5, radius * 2.0)),
                ..default()
            },
            Transform::from_translation(position),
            RigidBody::KinematicPositionBased,
            sensor_collider(Collider::ball(radius)),
            SceneEntity,
        ))
        .with_children(|parent| {
            spawn_slot_collars(parent, &arsenal);
            parent.spawn((
                ShieldVisual {
                    rotations_per_second: config.shield_rotations_per_second,
                    level_shown: None,
                },
                Sprite {
                    color: SHIELD_COLOR,
                    custom_size: Some(Vec2::splat(radius * 2.5)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, 0.2),
            ));
        })
        .insert(arsenal)
        .id();

    info!("Spawned hero {:?}", hero);
}

/// Spin the shield and match its opacity to the shield level.
pub fn update_shield_visual(
    time: Res<Time>,
    heroes: Query<&ShieldLevel, With<Hero>>,
    mut visuals: Query<(&Parent, &mut ShieldVisual, &mut Transform, &mut Sprite)>,
) {
    for (parent, mut visual, mut transform, mut sprite) in visuals.iter_mut() {
        let turns = visual.rotations_per_second * time.elapsed_secs();
        transform.rotation = Quat::from_rotation_z(-(turns.fract() * std::f32::consts::TAU));

        let Ok(shield) = heroes.get(parent.get()) else {
            continue;
        };
        if visual.level_shown != Some(shield.level()) {
            visual.level_shown = Some(shield.level());
            sprite.color.set_alpha(shield.level() as f32 * SHIELD_ALPHA_PER_LEVEL);
        }
    }
}
