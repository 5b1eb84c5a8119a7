//! Game state definitions that control the overall flow of the game.

use bevy::prelude::*;

/// Main game states.
///
/// - Start in `Loading` while data files are read
/// - `InGame` is active play; entering it builds a fresh scene
/// - `Restarting` tears the scene down after the hero is destroyed and
///   immediately hands control back to `InGame`
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    #[default]
    Loading,
    InGame,
    Restarting,
}
