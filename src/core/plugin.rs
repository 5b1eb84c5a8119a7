//! Core plugin that sets up game states, events, and the game flow.

use bevy::prelude::*;

use super::config::{load_game_config, GameConfig};
use super::events::*;
use super::states::*;
use crate::enemies::EnemyRegistry;
use crate::weapons::WeaponRegistry;

/// Frame ordering for gameplay systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Movement,
    Firing,
    Collision,
    Economy,
    Feedback,
}

/// Pending scene reload after the hero is destroyed.
#[derive(Resource, Default)]
pub struct RestartTimer(pub Option<Timer>);

/// Core plugin - must be added first as other plugins depend on it.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .init_state::<GameState>()
            .init_resource::<RestartTimer>()

            .add_event::<FireWeapons>()
            .add_event::<EnemyDestroyed>()
            .add_event::<HeroDestroyed>()
            .add_event::<PowerUpAbsorbed>()

            .configure_sets(
                Update,
                (
                    GameSet::Input,
                    GameSet::Movement,
                    GameSet::Firing,
                    GameSet::Collision,
                    GameSet::Economy,
                    GameSet::Feedback,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )

            .add_systems(Startup, load_game_config)
            .add_systems(Update, finish_loading.run_if(in_state(GameState::Loading)))
            .add_systems(
                Update,
                (schedule_restart, tick_restart).chain().in_set(GameSet::Feedback),
            )
            .add_systems(OnEnter(GameState::Restarting), restart_game);
    }
}

/// Enter the game once every data resource is in place.
fn finish_loading(
    config: Option<Res<GameConfig>>,
    weapons: Option<Res<WeaponRegistry>>,
    enemies: Option<Res<EnemyRegistry>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if config.is_some() && weapons.is_some() && enemies.is_some() {
        info!("Data loaded, starting game");
        next_state.set(GameState::InGame);
    }
}

/// Start the restart countdown when the hero goes down.
fn schedule_restart(
    mut events: EventReader<HeroDestroyed>,
    config: Res<GameConfig>,
    mut restart: ResMut<RestartTimer>,
) {
    if events.read().last().is_none() || restart.0.is_some() {
        return;
    }
    info!("Hero destroyed, restarting in {:.1}s", config.game_restart_delay);
    restart.0 = Some(Timer::from_seconds(config.game_restart_delay, TimerMode::Once));
}

fn tick_restart(
    time: Res<Time>,
    mut restart: ResMut<RestartTimer>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(timer) = restart.0.as_mut() else {
        return;
    };
    if timer.tick(time.delta()).finished() {
        restart.0 = None;
        next_state.set(GameState::Restarting);
    }
}

/// The scene was torn down on leaving `InGame`; build it again.
fn restart_game(mut next_state: ResMut<NextState<GameState>>) {
    info!("Restarting game");
    next_state.set(GameState::InGame);
}
