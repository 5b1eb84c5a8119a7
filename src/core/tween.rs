//! Easing helpers for interpolated movement.

use bevy::prelude::*;

/// Quadratic ease-out: fast start, slow arrival.
///
/// `u` is clamped to [0, 1] first.
pub fn ease_out(u: f32) -> f32 {
    let u = u.clamp(0.0, 1.0);
    1.0 - (1.0 - u).powi(2)
}

/// Interpolate between two points with ease-out applied to `u`.
pub fn ease_out_lerp(from: Vec3, to: Vec3, u: f32) -> Vec3 {
    from.lerp(to, ease_out(u))
}
