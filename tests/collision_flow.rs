//! Collision flow integration tests
//!
//! Runs the hit and contact systems headless and feeds them contact events
//! directly, checking:
//! - projectile damage, one-shot destruction and score
//! - protected parts and off-screen enemies
//! - hero shield, ramming, enemy fire and power-ups

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use bevy_rapier3d::rapier::geometry::CollisionEventFlags;

use space_shmup::combat::*;
use space_shmup::core::*;
use space_shmup::economy::*;
use space_shmup::enemies::Enemy;
use space_shmup::player::*;
use space_shmup::weapons::*;
use space_shmup::world::PlayBounds;

/// Helper: headless app with the collision and economy systems
fn create_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_event::<CollisionEvent>()
        .add_event::<EnemyDestroyed>()
        .add_event::<HeroDestroyed>()
        .add_event::<PowerUpAbsorbed>()
        .insert_resource(WeaponRegistry::builtin())
        .insert_resource(GameConfig::default())
        .insert_resource(PlayBounds::new(40.0, 1.0))
        .init_resource::<Score>()
        .add_systems(
            Update,
            (handle_projectile_hits, handle_hero_contacts, tally_score).chain(),
        );
    app
}

fn spawn_enemy(app: &mut App, position: Vec3, health: f32, score: u32) -> Entity {
    app.world_mut()
        .spawn((
            Enemy {
                score,
                drop_chance: 0.0,
                radius: 2.0,
            },
            Destruction::default(),
            Hull::new(health),
            Faction::Enemy,
            Transform::from_translation(position),
        ))
        .id()
}

fn spawn_shot(app: &mut App, kind: WeaponType, faction: Faction) -> Entity {
    app.world_mut()
        .spawn((Projectile { kind, faction }, Transform::default()))
        .id()
}

fn spawn_hero(app: &mut App, shield: i32) -> Entity {
    let mut arsenal = Arsenal::with_mounts(&[Vec3::ZERO; 5], Facing::Up);
    arsenal.slots[0].set_type(WeaponType::Blaster, app.world().resource::<WeaponRegistry>());
    app.world_mut()
        .spawn((
            Hero,
            Faction::Hero,
            ShieldLevel::new(shield),
            LastContact::default(),
            arsenal,
            Transform::default(),
        ))
        .id()
}

fn contact(app: &mut App, a: Entity, b: Entity) {
    app.world_mut()
        .send_event(CollisionEvent::Started(a, b, CollisionEventFlags::SENSOR));
}

fn exists(app: &App, entity: Entity) -> bool {
    app.world().entities().contains(entity)
}

fn shield_of(app: &App, hero: Entity) -> i32 {
    app.world().get::<ShieldLevel>(hero).map_or(-1, ShieldLevel::level)
}

/// Test: two blaster hits destroy a 2 HP enemy, scoring once
#[test]
fn test_enemy_destroyed_after_enough_hits() {
    let mut app = create_app();
    let enemy = spawn_enemy(&mut app, Vec3::ZERO, 2.0, 100);

    let shot = spawn_shot(&mut app, WeaponType::Blaster, Faction::Hero);
    contact(&mut app, shot, enemy);
    app.update();

    assert!(!exists(&app, shot), "projectile consumed by the hit");
    assert_eq!(app.world().get::<Hull>(enemy).map(|h| h.health), Some(1.0));
    assert_eq!(app.world().resource::<Score>().0, 0);

    let shot = spawn_shot(&mut app, WeaponType::Blaster, Faction::Hero);
    contact(&mut app, enemy, shot);
    app.update();

    assert!(!exists(&app, enemy));
    assert_eq!(app.world().resource::<Score>().0, 100);
    assert_eq!(app.world().resource::<Events<EnemyDestroyed>>().len(), 1);
}

/// Test: several contacts from one projectile in a frame apply once
#[test]
fn test_repeated_contacts_apply_once() {
    let mut app = create_app();
    let enemy = spawn_enemy(&mut app, Vec3::ZERO, 3.0, 100);
    let shot = spawn_shot(&mut app, WeaponType::Blaster, Faction::Hero);

    contact(&mut app, shot, enemy);
    contact(&mut app, shot, enemy);
    contact(&mut app, enemy, shot);
    app.update();

    assert_eq!(app.world().get::<Hull>(enemy).map(|h| h.health), Some(2.0));
}

/// Test: off-screen enemies ignore damage but still eat the projectile
#[test]
fn test_offscreen_enemy_takes_no_damage() {
    let mut app = create_app();
    let enemy = spawn_enemy(&mut app, Vec3::new(0.0, 45.0, 0.0), 2.0, 100);
    let shot = spawn_shot(&mut app, WeaponType::Blaster, Faction::Hero);

    contact(&mut app, shot, enemy);
    app.update();

    assert!(!exists(&app, shot));
    assert_eq!(app.world().get::<Hull>(enemy).map(|h| h.health), Some(2.0));
}

/// Test: enemy fire never damages enemies
#[test]
fn test_enemy_projectiles_pass_through_enemies() {
    let mut app = create_app();
    let enemy = spawn_enemy(&mut app, Vec3::ZERO, 2.0, 100);
    let shot = spawn_shot(&mut app, WeaponType::Blaster, Faction::Enemy);

    contact(&mut app, shot, enemy);
    app.update();

    assert!(exists(&app, shot));
    assert_eq!(app.world().get::<Hull>(enemy).map(|h| h.health), Some(2.0));
}

/// Test: a part behind a live protector is untouched
#[test]
fn test_protected_part_blocks_until_protector_falls() {
    let mut app = create_app();
    let root = app
        .world_mut()
        .spawn((
            Enemy {
                score: 500,
                drop_chance: 0.0,
                radius: 4.0,
            },
            Destruction::default(),
            Faction::Enemy,
            Transform::default(),
        ))
        .id();
    let fuselage = app.world_mut().spawn(Transform::default()).id();
    let cockpit = app.world_mut().spawn(Transform::default()).id();
    app.world_mut().entity_mut(root).add_children(&[fuselage, cockpit]);
    app.world_mut().entity_mut(root).insert(Parts::new(vec![
        Part::new("fuselage", 1.0).with_entity(fuselage),
        Part::new("cockpit", 1.0).protected_by(&["fuselage"]).with_entity(cockpit),
    ]));

    let shot = spawn_shot(&mut app, WeaponType::Blaster, Faction::Hero);
    contact(&mut app, shot, cockpit);
    app.update();

    assert!(!exists(&app, shot));
    let parts = app.world().get::<Parts>(root).unwrap();
    assert_eq!(parts.find_by_name("cockpit").map(|p| p.health), Some(1.0));

    let shot = spawn_shot(&mut app, WeaponType::Blaster, Faction::Hero);
    contact(&mut app, shot, fuselage);
    app.update();

    let shot = spawn_shot(&mut app, WeaponType::Blaster, Faction::Hero);
    contact(&mut app, shot, cockpit);
    app.update();

    assert!(!exists(&app, root));
    assert_eq!(app.world().resource::<Score>().0, 500);
}

/// Test: ramming costs shield and removes the enemy without score
#[test]
fn test_ramming_enemy_lowers_shield() {
    let mut app = create_app();
    let hero = spawn_hero(&mut app, 2);
    let enemy = spawn_enemy(&mut app, Vec3::ZERO, 5.0, 100);

    contact(&mut app, hero, enemy);
    app.update();

    assert_eq!(shield_of(&app, hero), 1);
    assert!(!exists(&app, enemy));
    assert_eq!(app.world().resource::<Score>().0, 0);
    assert!(app.world().resource::<Events<EnemyDestroyed>>().is_empty());
}

/// Test: an enemy shot down in the same frame it rams the hero costs no shield
#[test]
fn test_ramming_an_enemy_killed_this_frame() {
    let mut app = create_app();
    let hero = spawn_hero(&mut app, 2);
    let enemy = spawn_enemy(&mut app, Vec3::ZERO, 1.0, 100);
    let shot = spawn_shot(&mut app, WeaponType::Blaster, Faction::Hero);

    contact(&mut app, shot, enemy);
    contact(&mut app, hero, enemy);
    app.update();

    assert!(!exists(&app, enemy));
    assert_eq!(shield_of(&app, hero), 2);
    assert_eq!(app.world().resource::<Score>().0, 100);
}

/// Test: hit at shield 0 destroys the hero
#[test]
fn test_hero_destroyed_when_shield_depleted() {
    let mut app = create_app();
    let hero = spawn_hero(&mut app, 0);
    let shot = spawn_shot(&mut app, WeaponType::Blaster, Faction::Enemy);

    contact(&mut app, shot, hero);
    app.update();

    assert!(!exists(&app, hero));
    assert!(!exists(&app, shot));
    assert_eq!(app.world().resource::<Events<HeroDestroyed>>().len(), 1);
}

/// Test: the hero's own shots are ignored
#[test]
fn test_hero_ignores_own_projectiles() {
    let mut app = create_app();
    let hero = spawn_hero(&mut app, 1);
    let shot = spawn_shot(&mut app, WeaponType::Blaster, Faction::Hero);

    contact(&mut app, hero, shot);
    app.update();

    assert!(exists(&app, shot));
    assert_eq!(shield_of(&app, hero), 1);
}

/// Test: power-ups are absorbed once and follow the pickup rules
#[test]
fn test_power_up_pickups() {
    let mut app = create_app();
    let hero = spawn_hero(&mut app, 1);

    let shield = app.world_mut().spawn(PowerUp::new(WeaponType::Shield, 6.0)).id();
    contact(&mut app, hero, shield);
    contact(&mut app, shield, hero);
    app.update();

    assert_eq!(shield_of(&app, hero), 2);
    assert!(!exists(&app, shield));

    let blaster = app.world_mut().spawn(PowerUp::new(WeaponType::Blaster, 6.0)).id();
    contact(&mut app, hero, blaster);
    app.update();
    assert_eq!(app.world().get::<Arsenal>(hero).map(Arsenal::active_count), Some(2));

    let spread = app.world_mut().spawn(PowerUp::new(WeaponType::Spread, 6.0)).id();
    contact(&mut app, hero, spread);
    app.update();

    let arsenal = app.world().get::<Arsenal>(hero).unwrap();
    assert_eq!(arsenal.primary(), WeaponType::Spread);
    assert_eq!(arsenal.active_count(), 1);
}
