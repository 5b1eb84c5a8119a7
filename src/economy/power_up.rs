//! Power-up pickups dropped by destroyed enemies.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;

use super::drops::{roll_drop, unregistered_drops};
use crate::core::{EnemyDestroyed, GameConfig};
use crate::weapons::{WeaponRegistry, WeaponType};
use crate::world::{sensor_collider, PlayBounds, SceneEntity};

/// Share of the lifetime spent fading out.
const FADE_FRACTION: f32 = 0.25;

/// A pickup drifting through the play field.
#[derive(Component, Debug)]
pub struct PowerUp {
    pub kind: WeaponType,
    pub lifetime: Timer,
}

impl PowerUp {
    pub fn new(kind: WeaponType, lifetime: f32) -> Self {
        Self {
            kind,
            lifetime: Timer::from_seconds(lifetime, TimerMode::Once),
        }
    }

    /// Opacity for the current point in its lifetime.
    pub fn alpha(&self) -> f32 {
        let remaining = 1.0 - self.lifetime.fraction();
        (remaining / FADE_FRACTION).min(1.0)
    }
}

/// Mostly downward drift with a random sideways component.
pub fn drift_velocity(speed: f32, rng: &mut impl Rng) -> Vec3 {
    let sideways = rng.gen_range(-0.5..=0.5);
    Vec3::new(sideways, -1.0, 0.0).normalize() * speed
}

pub fn spawn_power_up(
    commands: &mut Commands,
    kind: WeaponType,
    position: Vec3,
    velocity: Vec3,
    registry: &WeaponRegistry,
    config: &GameConfig,
) -> Entity {
    let definition = registry.lookup(kind);
    let size = config.power_up_size;

    commands
        .spawn((
            PowerUp::new(kind, config.power_up_lifetime),
            Sprite {
                color: definition.color(),
                custom_size: Some(Vec2::splat(size)),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::KinematicVelocityBased,
            Velocity::linear(velocity),
            sensor_collider(Collider::ball(size / 2.0)),
            SceneEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text2d::new(definition.letter.clone()),
                TextFont {
                    font_size: size * 0.8,
                    ..default()
                },
                TextColor(Color::BLACK),
                Transform::from_xyz(0.0, 0.0, 0.1),
            ));
        })
        .id()
}

/// Maybe drop a power-up where each enemy died.
pub fn drop_power_ups(
    mut commands: Commands,
    mut events: EventReader<EnemyDestroyed>,
    registry: Res<WeaponRegistry>,
    config: Res<GameConfig>,
) {
    let mut rng = rand::thread_rng();
    for event in events.read() {
        let Some(kind) = roll_drop(&config.power_up_frequency, event.drop_chance, &mut rng) else {
            continue;
        };
        if kind != WeaponType::Shield && !registry.contains(kind) {
            warn!("No weapon definition for {:?}, skipping drop", kind);
            continue;
        }
        let velocity = drift_velocity(config.power_up_drift_speed, &mut rng);
        let entity = spawn_power_up(&mut commands, kind, event.position, velocity, &registry, &config);
        debug!("Dropped {:?} power-up ({:?})", kind, entity);
    }
}

/// Warn about drop table entries that would produce dead weapons.
pub fn check_drop_table(config: Res<GameConfig>, registry: Res<WeaponRegistry>) {
    for kind in unregistered_drops(&config.power_up_frequency, &registry) {
        warn!("power_up_frequency lists {:?}, which has no weapon definition", kind);
    }
}

/// Fade power-ups out and remove them when they expire or fall off screen.
pub fn age_power_ups(
    mut commands: Commands,
    time: Res<Time>,
    bounds: Res<PlayBounds>,
    config: Res<GameConfig>,
    mut power_ups: Query<(Entity, &mut PowerUp, &Transform, &mut Sprite)>,
) {
    let radius = config.power_up_size / 2.0;
    for (entity, mut power_up, transform, mut sprite) in power_ups.iter_mut() {
        power_up.lifetime.tick(time.delta());
        if power_up.lifetime.finished() || bounds.is_below(transform.translation, radius) {
            commands.entity(entity).despawn_recursive();
            continue;
        }
        sprite.color.set_alpha(power_up.alpha());
    }
}
