//! In-game HUD - score, shield level and primary weapon.

use bevy::prelude::*;

use crate::core::{GameSet, GameState, PowerUpAbsorbed};
use crate::economy::Score;
use crate::player::{Hero, ShieldLevel, MAX_SHIELD_LEVEL};
use crate::weapons::{Arsenal, WeaponRegistry, WeaponType};

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

#[derive(Component)]
pub struct ScoreText;

/// Marker for the shield bar fill.
#[derive(Component)]
pub struct ShieldBar;

#[derive(Component)]
pub struct ShieldText;

#[derive(Component)]
pub struct WeaponText;

/// Seconds a pickup notice stays on screen.
pub const PICKUP_NOTICE_SECONDS: f32 = 1.5;

/// Short-lived text naming the last power-up the hero absorbed.
#[derive(Component)]
pub struct PickupNotice {
    pub timer: Timer,
}

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(
            Update,
            (
                update_score_text,
                update_shield_display,
                update_weapon_text,
                update_pickup_notice,
            )
                .in_set(GameSet::Feedback),
        );
}

pub fn score_label(score: Score) -> String {
    format!("Score: {}", score.0)
}

pub fn shield_label(level: i32) -> String {
    format!("Shield {}/{}", level, MAX_SHIELD_LEVEL)
}

/// Letter shown for the primary weapon; `-` when there is none.
pub fn weapon_label(kind: WeaponType, registry: &WeaponRegistry) -> String {
    let letter = &registry.lookup(kind).letter;
    if kind == WeaponType::None || letter.is_empty() {
        "Weapon: -".to_string()
    } else {
        format!("Weapon: {}", letter)
    }
}

fn label(text: String, font_size: f32) -> (Text, TextFont, TextColor) {
    (
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(Color::srgb(0.85, 0.85, 0.9)),
    )
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    // Score, top-left
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(16.0),
                left: Val::Px(20.0),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((label(score_label(Score::default()), 24.0), ScoreText));
        });

    // Pickup notice, top-centre
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                top: Val::Px(48.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            let mut timer = Timer::from_seconds(PICKUP_NOTICE_SECONDS, TimerMode::Once);
            timer.tick(timer.duration());
            parent.spawn((
                label(String::new(), 20.0),
                PickupNotice { timer },
                Visibility::Hidden,
            ));
        });

    // Shield and weapon, bottom-left
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::End,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(20.0)),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                label(weapon_label(WeaponType::None, &WeaponRegistry::default()), 16.0),
                WeaponText,
                Node {
                    margin: UiRect::bottom(Val::Px(5.0)),
                    ..default()
                },
            ));

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        label(shield_label(0), 14.0),
                        ShieldText,
                        Node {
                            width: Val::Px(80.0),
                            ..default()
                        },
                    ));
                    row.spawn((
                        Node {
                            width: Val::Px(150.0),
                            height: Val::Px(12.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                    ))
                    .with_children(|bg| {
                        bg.spawn((
                            Node {
                                width: Val::Percent(0.0),
                                height: Val::Percent(100.0),
                                ..default()
                            },
                            BackgroundColor(Color::srgb(0.3, 0.8, 1.0)),
                            ShieldBar,
                        ));
                    });
                });
        });
}

fn update_score_text(score: Res<Score>, mut query: Query<&mut Text, With<ScoreText>>) {
    for mut text in query.iter_mut() {
        text.0 = score_label(*score);
    }
}

/// Shield text and bar both follow the hero's shield level.
fn update_shield_display(
    hero_query: Query<&ShieldLevel, With<Hero>>,
    mut text_query: Query<&mut Text, With<ShieldText>>,
    mut bar_query: Query<&mut Node, With<ShieldBar>>,
) {
    let level = hero_query.get_single().map_or(0, ShieldLevel::level);

    for mut text in text_query.iter_mut() {
        text.0 = shield_label(level);
    }
    if let Ok(mut bar) = bar_query.get_single_mut() {
        bar.width = Val::Percent(level as f32 / MAX_SHIELD_LEVEL as f32 * 100.0);
    }
}

fn update_weapon_text(
    hero_query: Query<&Arsenal, With<Hero>>,
    registry: Res<WeaponRegistry>,
    mut query: Query<&mut Text, With<WeaponText>>,
) {
    let kind = hero_query.get_single().map_or(WeaponType::None, Arsenal::primary);
    for mut text in query.iter_mut() {
        text.0 = weapon_label(kind, &registry);
    }
}

/// Show the latest absorbed power-up, then hide it once its timer runs out.
fn update_pickup_notice(
    time: Res<Time>,
    mut events: EventReader<PowerUpAbsorbed>,
    mut query: Query<(&mut PickupNotice, &mut Text, &mut Visibility)>,
) {
    let latest = events.read().last().map(|event| event.kind);
    for (mut notice, mut text, mut visibility) in query.iter_mut() {
        if let Some(kind) = latest {
            text.0 = pickup_label(kind);
            notice.timer.reset();
            *visibility = Visibility::Inherited;
        } else if notice.timer.tick(time.delta()).finished() {
            *visibility = Visibility::Hidden;
        }
    }
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Name shown when a power-up of `kind` is picked up.
pub fn pickup_label(kind: WeaponType) -> String {
    match kind {
        WeaponType::Shield => "+1 Shield".to_string(),
        _ => format!("{:?}!", kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weapons::WeaponDefinition;

    #[test]
    fn weapon_label_shows_letter() {
        let registry = WeaponRegistry::from_definitions([WeaponDefinition {
            kind: WeaponType::Spread,
            letter: "S".to_string(),
            ..default()
        }]);
        assert_eq!(weapon_label(WeaponType::Spread, &registry), "Weapon: S");
        assert_eq!(weapon_label(WeaponType::Laser, &registry), "Weapon: -");
    }

    #[test]
    fn pickup_labels() {
        assert_eq!(pickup_label(WeaponType::Shield), "+1 Shield");
        assert_eq!(pickup_label(WeaponType::Spread), "Spread!");
    }

    #[test]
    fn labels() {
        assert_eq!(score_label(Score(1200)), "Score: 1200");
        assert_eq!(shield_label(2), "Shield 2/4");
    }
}
