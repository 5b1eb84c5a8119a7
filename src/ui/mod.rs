//! UI module - heads-up display.

mod hud;
mod plugin;

pub use hud::{pickup_label, score_label, shield_label, weapon_label, HudRoot, PickupNotice};
pub use plugin::UiPlugin;
