//! Visible play field bounds.

use bevy::prelude::*;
use rand::Rng;

/// Which edges of the play field a body is past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundsReport {
    pub off_up: bool,
    pub off_down: bool,
    pub off_left: bool,
    pub off_right: bool,
}

impl BoundsReport {
    pub fn on_screen(&self) -> bool {
        !(self.off_up || self.off_down || self.off_left || self.off_right)
    }
}

/// Extent of the visible camera region, centred on the origin.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PlayBounds {
    pub half_width: f32,
    pub half_height: f32,
}

impl PlayBounds {
    pub fn new(half_height: f32, aspect: f32) -> Self {
        Self {
            half_width: half_height * aspect,
            half_height,
        }
    }

    /// Test `pos` against the bounds shrunk by `radius`.
    ///
    /// A positive radius means the whole body must be inside; a negative one
    /// lets the body count as on screen while partly outside.
    pub fn check(&self, pos: Vec3, radius: f32) -> BoundsReport {
        BoundsReport {
            off_up: pos.y > self.half_height - radius,
            off_down: pos.y < -self.half_height + radius,
            off_left: pos.x < -self.half_width + radius,
            off_right: pos.x > self.half_width - radius,
        }
    }

    pub fn is_on_screen(&self, pos: Vec3, radius: f32) -> bool {
        self.check(pos, radius).on_screen()
    }

    /// Whether a body has left through the bottom edge completely.
    pub fn is_below(&self, pos: Vec3, radius: f32) -> bool {
        pos.y < -self.half_height - radius
    }

    /// Pull a position back inside the bounds shrunk by `radius`.
    pub fn clamp(&self, pos: Vec3, radius: f32) -> Vec3 {
        let w = (self.half_width - radius).max(0.0);
        let h = (self.half_height - radius).max(0.0);
        Vec3::new(pos.x.clamp(-w, w), pos.y.clamp(-h, h), pos.z)
    }

    /// Uniform random point inside the bounds shrunk by `radius`.
    pub fn random_point(&self, radius: f32, rng: &mut impl Rng) -> Vec3 {
        let w = (self.half_width - radius).max(0.0);
        let h = (self.half_height - radius).max(0.0);
        Vec3::new(rng.gen_range(-w..=w), rng.gen_range(-h..=h), 0.0)
    }
}

impl Default for PlayBounds {
    fn default() -> Self {
        Self::new(40.0, 16.0 / 9.0)
    }
}
