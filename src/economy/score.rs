//! Session score.

use bevy::prelude::*;

use crate::core::EnemyDestroyed;

/// Points earned this session.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score(pub u32);

impl Score {
    pub fn add(&mut self, points: u32) {
        self.0 = self.0.saturating_add(points);
    }
}

pub fn reset_score(mut score: ResMut<Score>) {
    *score = Score::default();
}

/// Award points for every destroyed enemy.
pub fn tally_score(mut events: EventReader<EnemyDestroyed>, mut score: ResMut<Score>) {
    for event in events.read() {
        score.add(event.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_saturates() {
        let mut score = Score(u32::MAX - 5);
        score.add(100);
        assert_eq!(score.0, u32::MAX);
    }
}
