//! Game flow integration tests
//!
//! Headless checks for the session-level behaviour:
//! - duplicate initialization keeps the first registry and hero
//! - destroyed enemies drop power-ups, which expire or fall away
//! - escaped enemies are removed
//! - hero destruction restarts the scene

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use space_shmup::core::*;
use space_shmup::economy::*;
use space_shmup::enemies::{despawn_escaped_enemies, Enemy, EnemyRegistry};
use space_shmup::player::{spawn_hero, Hero};
use space_shmup::weapons::*;
use space_shmup::world::{cleanup_scene, PlayBounds, SceneEntity};

/// Helper: headless app with the data resources every system expects
fn create_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(WeaponRegistry::builtin())
        .insert_resource(GameConfig::default())
        .insert_resource(PlayBounds::new(40.0, 1.0));
    app
}

fn count<C: Component>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, With<C>>()
        .iter(app.world())
        .count()
}

fn current_state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

/// Test: a registry that is already installed is kept
#[test]
fn test_second_weapon_registry_is_ignored() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(WeaponRegistry::from_definitions([WeaponDefinition {
            kind: WeaponType::Blaster,
            damage_on_hit: 7.0,
            ..default()
        }]))
        .add_systems(Startup, load_weapon_registry);

    app.update();

    let registry = app.world().resource::<WeaponRegistry>();
    assert_eq!(registry.lookup(WeaponType::Blaster).damage_on_hit, 7.0);
    assert_eq!(registry.len(), 1);
}

/// Test: spawning while a hero exists is skipped
#[test]
fn test_second_hero_is_not_spawned() {
    let mut app = create_app();
    app.add_systems(Update, spawn_hero);

    app.update();
    app.update();
    app.update();

    assert_eq!(count::<Hero>(&mut app), 1);
}

/// Test: a certain drop spawns the listed power-up where the enemy died
#[test]
fn test_destroyed_enemy_drops_power_up() {
    let mut app = create_app();
    app.world_mut().resource_mut::<GameConfig>().power_up_frequency = vec![WeaponType::Spread];
    app.add_event::<EnemyDestroyed>()
        .add_systems(Update, drop_power_ups);

    let position = Vec3::new(3.0, 5.0, 0.0);
    app.world_mut().send_event(EnemyDestroyed {
        entity: Entity::PLACEHOLDER,
        position,
        score: 100,
        drop_chance: 1.0,
    });
    app.update();

    let drops: Vec<(WeaponType, Vec3)> = app
        .world_mut()
        .query::<(&PowerUp, &Transform)>()
        .iter(app.world())
        .map(|(power_up, transform)| (power_up.kind, transform.translation))
        .collect();
    assert_eq!(drops, vec![(WeaponType::Spread, position)]);
}

/// Test: no drop when the chance is zero or the type has no definition
#[test]
fn test_no_drop_without_chance_or_definition() {
    let mut app = create_app();
    app.add_event::<EnemyDestroyed>()
        .add_systems(Update, drop_power_ups);

    app.world_mut().send_event(EnemyDestroyed {
        entity: Entity::PLACEHOLDER,
        position: Vec3::ZERO,
        score: 100,
        drop_chance: 0.0,
    });
    app.update();
    assert_eq!(count::<PowerUp>(&mut app), 0);

    app.world_mut().resource_mut::<GameConfig>().power_up_frequency = vec![WeaponType::Missile];
    app.world_mut().send_event(EnemyDestroyed {
        entity: Entity::PLACEHOLDER,
        position: Vec3::ZERO,
        score: 100,
        drop_chance: 1.0,
    });
    app.update();
    assert_eq!(count::<PowerUp>(&mut app), 0);
}

/// Test: power-ups go away when they expire or fall off the bottom
#[test]
fn test_power_ups_expire_or_fall_away() {
    let mut app = create_app();
    app.add_systems(Update, age_power_ups);

    let expired = app
        .world_mut()
        .spawn((PowerUp::new(WeaponType::Blaster, 0.0), Sprite::default(), Transform::default()))
        .id();
    let fallen = app
        .world_mut()
        .spawn((
            PowerUp::new(WeaponType::Blaster, 10.0),
            Sprite::default(),
            Transform::from_xyz(0.0, -50.0, 0.0),
        ))
        .id();
    let alive = app
        .world_mut()
        .spawn((PowerUp::new(WeaponType::Blaster, 10.0), Sprite::default(), Transform::default()))
        .id();

    app.update();

    assert!(!app.world().entities().contains(expired));
    assert!(!app.world().entities().contains(fallen));
    assert!(app.world().entities().contains(alive));
}

/// Test: enemies below the bottom edge are removed, others stay
#[test]
fn test_escaped_enemies_are_removed() {
    let mut app = create_app();
    app.add_systems(Update, despawn_escaped_enemies);

    let enemy = |y: f32| {
        (
            Enemy {
                score: 100,
                drop_chance: 0.0,
                radius: 2.0,
            },
            Transform::from_xyz(0.0, y, 0.0),
        )
    };
    let escaped = app.world_mut().spawn(enemy(-45.0)).id();
    let lingering = app.world_mut().spawn(enemy(-41.0)).id();

    app.update();

    assert!(!app.world().entities().contains(escaped));
    assert!(app.world().entities().contains(lingering));
}

/// Helper: app running the real game flow, already in `InGame`
fn create_flow_app() -> App {
    let mut app = create_app();
    app.add_plugins(StatesPlugin)
        .insert_resource(EnemyRegistry::builtin())
        .add_plugins(CorePlugin)
        .add_systems(OnExit(GameState::InGame), cleanup_scene);

    app.update();
    app.world_mut().resource_mut::<GameConfig>().game_restart_delay = 0.0;
    app.update();
    assert_eq!(current_state(&app), GameState::InGame);
    app
}

/// Test: the scene lives on while the hero does
#[test]
fn test_scene_kept_without_hero_destruction() {
    let mut app = create_flow_app();
    let scenery = app.world_mut().spawn(SceneEntity).id();

    for _ in 0..5 {
        app.update();
    }

    assert_eq!(current_state(&app), GameState::InGame);
    assert!(app.world().entities().contains(scenery));
}

/// Test: hero destruction tears the scene down and returns to InGame
#[test]
fn test_hero_destruction_restarts_scene() {
    let mut app = create_flow_app();
    let scenery = app.world_mut().spawn(SceneEntity).id();

    app.world_mut().send_event(HeroDestroyed {
        hero: Entity::PLACEHOLDER,
    });

    let mut saw_restart = false;
    for _ in 0..6 {
        app.update();
        saw_restart |= current_state(&app) == GameState::Restarting;
    }

    assert!(saw_restart);
    assert_eq!(current_state(&app), GameState::InGame);
    assert!(!app.world().entities().contains(scenery));
}
