//! Economy plugin - score and power-up drops.

use bevy::prelude::*;

use super::power_up::{age_power_ups, check_drop_table, drop_power_ups};
use super::score::{reset_score, tally_score, Score};
use crate::core::{GameSet, GameState};

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>()
            .add_systems(OnEnter(GameState::InGame), (reset_score, check_drop_table))
            .add_systems(Update, (tally_score, drop_power_ups).in_set(GameSet::Economy))
            .add_systems(Update, age_power_ups.in_set(GameSet::Movement));
    }
}
