//! Economy module - score, drop table and power-up pickups.

mod drops;
mod plugin;
mod power_up;
mod score;

pub use drops::{roll_drop, unregistered_drops};
pub use plugin::EconomyPlugin;
pub use power_up::{
    age_power_ups, check_drop_table, drift_velocity, drop_power_ups, spawn_power_up, PowerUp,
};
pub use score::{reset_score, tally_score, Score};
