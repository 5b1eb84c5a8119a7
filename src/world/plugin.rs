//! World plugin - camera, play bounds and scene lifetime.

use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy::window::{PrimaryWindow, WindowResized};
use bevy_rapier3d::prelude::*;

use super::bounds::PlayBounds;
use crate::core::{GameConfig, GameState};

/// Marker for everything that belongs to one play session.
///
/// All of it is despawned when leaving `InGame`, which is how a restart
/// reloads the scene.
#[derive(Component)]
pub struct SceneEntity;

/// World plugin - camera, bounds and scene cleanup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayBounds>()
            .add_systems(
                Startup,
                setup_camera.after(crate::core::load_game_config),
            )
            .add_systems(Update, update_play_bounds)
            .add_systems(OnExit(GameState::InGame), cleanup_scene);
    }
}

/// Spawn an orthographic camera showing a fixed-height play field.
fn setup_camera(mut commands: Commands, config: Res<GameConfig>) {
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: config.camera_half_height * 2.0,
            },
            ..OrthographicProjection::default_2d()
        },
    ));
}

/// Keep the play bounds in sync with the window's aspect ratio.
pub fn update_play_bounds(
    mut resized: EventReader<WindowResized>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    config: Option<Res<GameConfig>>,
    mut bounds: ResMut<PlayBounds>,
) {
    let config_changed = config.as_ref().is_some_and(|c| c.is_changed());
    if resized.read().last().is_none() && !config_changed {
        return;
    }

    let Ok(window) = window_query.get_single() else {
        return;
    };
    let height = window.height();
    if height <= 0.0 {
        return;
    }

    let half_height = config.map_or(bounds.half_height, |c| c.camera_half_height);
    *bounds = PlayBounds::new(half_height, window.width() / height);
}

/// Despawn the whole play session.
pub fn cleanup_scene(mut commands: Commands, query: Query<Entity, With<SceneEntity>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Collider setup shared by every body that reports hits.
///
/// All bodies are kinematic sensors, so kinematic-kinematic pairs must be
/// enabled explicitly.
pub fn sensor_collider(collider: Collider) -> impl Bundle {
    (
        collider,
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_KINEMATIC,
    )
}
