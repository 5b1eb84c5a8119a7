//! Enemy spawning.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use super::components::Enemy;
use super::data::{EnemyDefinition, EnemyRegistry, MovementDef};
use super::movement::Movement;
use crate::combat::{BaseColor, Destruction, Hull, Part, Parts};
use crate::core::{Faction, GameConfig};
use crate::weapons::{spawn_slot_collars, Arsenal, Facing, WeaponRegistry};
use crate::world::{sensor_collider, PlayBounds, SceneEntity};

/// Spawn controller: releases one enemy every `1 / rate` seconds.
#[derive(Resource, Debug)]
pub struct EnemySpawner {
    pub timer: Timer,
}

impl EnemySpawner {
    pub fn new(per_second: f32) -> Self {
        Self {
            timer: Timer::from_seconds(1.0 / per_second.max(f32::EPSILON), TimerMode::Repeating),
        }
    }
}

impl Default for EnemySpawner {
    fn default() -> Self {
        Self::new(GameConfig::default().enemy_spawn_per_second)
    }
}

/// Random spawn point just above the top edge.
pub fn spawn_position(bounds: &PlayBounds, padding: f32, rng: &mut impl Rng) -> Vec3 {
    let x_max = (bounds.half_width - padding).max(0.0);
    Vec3::new(
        rng.gen_range(-x_max..=x_max),
        bounds.half_height + padding,
        0.0,
    )
}

/// Spawn one enemy from its definition at `position`.
pub fn spawn_enemy(
    commands: &mut Commands,
    definition: &EnemyDefinition,
    position: Vec3,
    now: f32,
    bounds: &PlayBounds,
    weapons: &WeaponRegistry,
    rng: &mut impl Rng,
) -> Entity {
    let movement = match definition.movement {
        MovementDef::LinearDescent { speed } => Movement::LinearDescent { speed },
        MovementDef::Waypoint { duration } => Movement::waypoint(
            position,
            bounds.random_point(definition.radius, rng),
            now,
            duration,
        ),
    };

    let root = commands
        .spawn((
            Enemy {
                score: definition.score,
                drop_chance: definition.drop_chance,
                radius: definition.radius,
            },
            Destruction::default(),
            movement,
            Faction::Enemy,
            Transform::from_translation(position),
            Visibility::default(),
            RigidBody::KinematicPositionBased,
            SceneEntity,
        ))
        .id();

    if definition.is_multi_part() {
        let mut parts = Vec::with_capacity(definition.parts.len());
        for part_def in &definition.parts {
            let color = part_def
                .color
                .map_or(definition.color(), |(r, g, b)| Color::srgb(r, g, b));
            let size = Vec2::new(part_def.size.0, part_def.size.1);
            let part_entity = commands
                .spawn((
                    BaseColor(color),
                    Sprite {
                        color,
                        custom_size: Some(size),
                        ..default()
                    },
                    Transform::from_xyz(part_def.offset.0, part_def.offset.1, 0.0),
                    sensor_collider(Collider::cuboid(size.x / 2.0, size.y / 2.0, 0.5)),
                ))
                .id();
            commands.entity(root).add_child(part_entity);

            let mut part = Part::new(part_def.name.clone(), part_def.health).with_entity(part_entity);
            part.protected_by = part_def.protected_by.clone();
            parts.push(part);
        }
        commands.entity(root).insert(Parts::new(parts));
    } else {
        commands.entity(root).insert((
            Hull::new(definition.health),
            BaseColor(definition.color()),
            Sprite {
                color: definition.color(),
                custom_size: Some(Vec2::splat(definition.radius * 2.0)),
                ..default()
            },
            sensor_collider(Collider::ball(definition.radius)),
        ));
    }

    if let Some(mounted) = &definition.weapon {
        let offset = Vec3::new(mounted.offset.0, mounted.offset.1, 0.0);
        let mut arsenal = Arsenal::with_mounts(&[offset], Facing::Down);
        arsenal.slots[0].set_type(mounted.kind, weapons);
        commands
            .entity(root)
            .with_children(|parent| spawn_slot_collars(parent, &arsenal))
            .insert(arsenal);
    }

    root
}

/// Reset the spawn clock at the start of each session.
pub fn reset_spawner(mut commands: Commands, config: Res<GameConfig>) {
    commands.insert_resource(EnemySpawner::new(config.enemy_spawn_per_second));
}

/// Release enemies on the spawner's schedule.
pub fn spawn_enemies(
    mut commands: Commands,
    time: Res<Time>,
    mut spawner: ResMut<EnemySpawner>,
    registry: Res<EnemyRegistry>,
    weapons: Res<WeaponRegistry>,
    config: Res<GameConfig>,
    bounds: Res<PlayBounds>,
) {
    spawner.timer.tick(time.delta());
    let due = spawner.timer.times_finished_this_tick();
    if due == 0 {
        return;
    }

    let mut rng = rand::thread_rng();
    let types = registry.types();
    for _ in 0..due {
        let Some(enemy_type) = types.choose(&mut rng) else {
            warn!("No enemy definitions registered, nothing to spawn");
            return;
        };
        let Some(definition) = registry.get(enemy_type) else {
            continue;
        };

        let padding = if definition.radius > 0.0 {
            definition.radius
        } else {
            config.enemy_default_padding
        };
        let position = spawn_position(&bounds, padding, &mut rng);
        let entity = spawn_enemy(
            &mut commands,
            definition,
            position,
            time.elapsed_secs(),
            &bounds,
            &weapons,
            &mut rng,
        );
        debug!("Spawned {} '{}' ({:?}) at {:?}", enemy_type, definition.name, entity, position);
    }
}
