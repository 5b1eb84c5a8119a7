//! Hero movement and fire input.

use bevy::prelude::*;

use super::components::Hero;
use crate::core::{FireWeapons, GameConfig};
use crate::world::PlayBounds;

/// Keyboard axes from arrows or WASD, each in `-1..=1`.
pub fn input_axes(keyboard: &ButtonInput<KeyCode>) -> Vec2 {
    let axis = |negative: [KeyCode; 2], positive: [KeyCode; 2]| {
        let mut value = 0.0;
        if keyboard.any_pressed(negative) {
            value -= 1.0;
        }
        if keyboard.any_pressed(positive) {
            value += 1.0;
        }
        value
    };
    Vec2::new(
        axis([KeyCode::KeyA, KeyCode::ArrowLeft], [KeyCode::KeyD, KeyCode::ArrowRight]),
        axis([KeyCode::KeyS, KeyCode::ArrowDown], [KeyCode::KeyW, KeyCode::ArrowUp]),
    )
}

/// Visual tilt for the given input: pitch around x, roll around y.
pub fn tilt(axes: Vec2, config: &GameConfig) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        (axes.y * config.pitch_mult).to_radians(),
        (axes.x * config.roll_mult).to_radians(),
        0.0,
    )
}

/// Move and tilt the hero, keeping it inside the play field.
pub fn hero_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<GameConfig>,
    bounds: Res<PlayBounds>,
    mut heroes: Query<&mut Transform, With<Hero>>,
) {
    let Ok(mut transform) = heroes.get_single_mut() else {
        return;
    };

    let axes = input_axes(&keyboard);
    let step = axes.extend(0.0) * config.hero_speed * time.delta_secs();
    transform.translation = bounds.clamp(transform.translation + step, config.hero_radius);
    transform.rotation = tilt(axes, &config);
}

/// Ask the hero's weapons to fire while the fire button is held.
pub fn hero_fire_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    heroes: Query<Entity, With<Hero>>,
    mut fire: EventWriter<FireWeapons>,
) {
    if !keyboard.pressed(config.fire_button.key_code()) {
        return;
    }
    for ship in heroes.iter() {
        fire.send(FireWeapons { ship });
    }
}
