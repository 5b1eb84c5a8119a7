//! World module - camera, play bounds and scene lifetime.

mod bounds;
mod plugin;

pub use bounds::{BoundsReport, PlayBounds};
pub use plugin::{cleanup_scene, sensor_collider, update_play_bounds, SceneEntity, WorldPlugin};
