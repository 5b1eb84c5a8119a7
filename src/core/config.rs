//! Game configuration loaded from an external RON file.
//!
//! Everything a designer would tweak between runs lives here, so balance
//! changes don't need a recompile.

use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

use super::error::{parse_ron, read_data_file, DataLoadError};
use crate::weapons::WeaponType;

pub const GAME_CONFIG_PATH: &str = "assets/data/game.ron";

/// Input that fires the hero's weapons while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum FireButton {
    #[default]
    Space,
    Enter,
    KeyZ,
    KeyJ,
}

impl FireButton {
    pub fn key_code(self) -> KeyCode {
        match self {
            FireButton::Space => KeyCode::Space,
            FireButton::Enter => KeyCode::Enter,
            FireButton::KeyZ => KeyCode::KeyZ,
            FireButton::KeyJ => KeyCode::KeyJ,
        }
    }
}

/// Gameplay configuration loaded from `assets/data/game.ron`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Hero
    pub hero_speed: f32,
    pub roll_mult: f32,
    pub pitch_mult: f32,
    pub hero_radius: f32,
    pub fire_button: FireButton,
    pub game_restart_delay: f32,
    pub starting_shield: i32,
    pub starting_weapon: WeaponType,
    /// Mount offsets of the hero's weapon slots, slot 0 first
    pub weapon_mounts: Vec<(f32, f32)>,
    pub shield_rotations_per_second: f32,
    // Play field
    /// Half of the visible play field height in world units
    pub camera_half_height: f32,
    // Enemies
    pub enemy_spawn_per_second: f32,
    pub enemy_default_padding: f32,
    pub damage_flash_duration: f32,
    // Power-ups
    /// Weighted drop list; repeat a type to make it more likely
    pub power_up_frequency: Vec<WeaponType>,
    pub power_up_drift_speed: f32,
    pub power_up_lifetime: f32,
    pub power_up_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hero_speed: 30.0,
            roll_mult: -45.0,
            pitch_mult: 30.0,
            hero_radius: 2.0,
            fire_button: FireButton::Space,
            game_restart_delay: 2.0,
            starting_shield: 1,
            starting_weapon: WeaponType::Blaster,
            weapon_mounts: vec![(0.0, 2.0), (-1.5, 1.0), (1.5, 1.0), (-3.0, 0.0), (3.0, 0.0)],
            shield_rotations_per_second: 0.1,
            camera_half_height: 40.0,
            enemy_spawn_per_second: 0.5,
            enemy_default_padding: 1.5,
            damage_flash_duration: 0.1,
            power_up_frequency: vec![
                WeaponType::Blaster,
                WeaponType::Blaster,
                WeaponType::Spread,
                WeaponType::Shield,
            ],
            power_up_drift_speed: 4.0,
            power_up_lifetime: 6.0,
            power_up_size: 2.0,
        }
    }
}

impl GameConfig {
    /// Parse config text and reject values the game can't run with.
    pub fn from_ron(path: &str, contents: &str) -> Result<Self, DataLoadError> {
        let config: Self = parse_ron(path, contents)?;
        config.validate(path)?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self, DataLoadError> {
        let contents = read_data_file(path)?;
        Self::from_ron(&path.display().to_string(), &contents)
    }

    /// Load from the default path, falling back to defaults on any error.
    pub fn load() -> Self {
        match Self::load_from(Path::new(GAME_CONFIG_PATH)) {
            Ok(config) => {
                info!("Loaded game config from {}", GAME_CONFIG_PATH);
                config
            }
            Err(DataLoadError::FileNotFound(path)) => {
                warn!("Could not find {}. Using defaults.", path);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    fn validate(&self, path: &str) -> Result<(), DataLoadError> {
        let invalid = |details: &str| DataLoadError::InvalidValue {
            path: path.to_string(),
            details: details.to_string(),
        };

        if self.enemy_spawn_per_second <= 0.0 {
            return Err(invalid("enemy_spawn_per_second must be positive"));
        }
        if self.camera_half_height <= 0.0 {
            return Err(invalid("camera_half_height must be positive"));
        }
        if self.weapon_mounts.is_empty() {
            return Err(invalid("weapon_mounts needs at least one slot"));
        }
        Ok(())
    }

    pub fn weapon_mount_offsets(&self) -> Vec<Vec3> {
        self.weapon_mounts
            .iter()
            .map(|(x, y)| Vec3::new(*x, *y, 0.0))
            .collect()
    }
}

/// System to load game config at startup.
pub fn load_game_config(mut commands: Commands) {
    commands.insert_resource(GameConfig::load());
}
