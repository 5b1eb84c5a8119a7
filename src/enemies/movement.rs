//! Enemy movement strategies.

use bevy::prelude::*;

use crate::core::ease_out_lerp;

/// How an enemy moves, chosen per instance from its definition.
#[derive(Component, Debug, Clone, PartialEq)]
pub enum Movement {
    /// Straight down at a constant speed.
    LinearDescent { speed: f32 },
    /// Eased glide between random on-screen points.
    Waypoint {
        from: Vec3,
        to: Vec3,
        started_at: f32,
        duration: f32,
    },
}

impl Movement {
    pub fn waypoint(start: Vec3, target: Vec3, now: f32, duration: f32) -> Self {
        Movement::Waypoint {
            from: start,
            to: target,
            started_at: now,
            duration: duration.max(f32::EPSILON),
        }
    }

    /// Compute the next position.
    ///
    /// `next_target` is only called when a waypoint leg completes.
    pub fn step(
        &mut self,
        pos: Vec3,
        now: f32,
        dt: f32,
        next_target: impl FnOnce() -> Vec3,
    ) -> Vec3 {
        match self {
            Movement::LinearDescent { speed } => pos - Vec3::Y * *speed * dt,
            Movement::Waypoint {
                from,
                to,
                started_at,
                duration,
            } => {
                let mut u = (now - *started_at) / *duration;
                if u >= 1.0 {
                    *from = *to;
                    *to = next_target();
                    *started_at = now;
                    u = 0.0;
                }
                let next = ease_out_lerp(*from, *to, u);
                Vec3::new(next.x, next.y, pos.z)
            }
        }
    }
}
