//! Weapon definition registry.

use bevy::prelude::*;
use std::collections::HashMap;
use std::path::Path;

use super::definition::{WeaponDefinition, WeaponType};
use crate::core::{parse_ron, read_data_file, DataLoadError};

pub const WEAPONS_PATH: &str = "assets/data/weapons.ron";

/// Resource mapping each weapon type to its definition.
///
/// Built once at startup and read-only afterwards.
#[derive(Resource, Debug, Default)]
pub struct WeaponRegistry {
    definitions: HashMap<WeaponType, WeaponDefinition>,
    fallback: WeaponDefinition,
}

impl WeaponRegistry {
    /// Build the registry. A later definition for the same type replaces
    /// an earlier one.
    pub fn from_definitions(definitions: impl IntoIterator<Item = WeaponDefinition>) -> Self {
        let mut map = HashMap::new();
        for def in definitions {
            map.insert(def.kind, def);
        }
        Self {
            definitions: map,
            fallback: WeaponDefinition::default(),
        }
    }

    /// Get the definition for a type, or the zero "none" definition.
    pub fn lookup(&self, kind: WeaponType) -> &WeaponDefinition {
        self.definitions.get(&kind).unwrap_or(&self.fallback)
    }

    pub fn contains(&self, kind: WeaponType) -> bool {
        self.definitions.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Read and parse a weapon definition list.
    pub fn load_from(path: &Path) -> Result<Self, DataLoadError> {
        let contents = read_data_file(path)?;
        let list: Vec<WeaponDefinition> = parse_ron(&path.display().to_string(), &contents)?;
        Ok(Self::from_definitions(list))
    }

    /// Compiled-in definitions used when the data file is unavailable.
    pub fn builtin() -> Self {
        Self::from_definitions([
            WeaponDefinition {
                kind: WeaponType::Blaster,
                letter: "B".to_string(),
                color: (1.0, 1.0, 1.0),
                projectile_color: (1.0, 1.0, 1.0),
                damage_on_hit: 1.0,
                delay_between_shots: 0.2,
                velocity: 50.0,
                ..default()
            },
            WeaponDefinition {
                kind: WeaponType::Spread,
                letter: "S".to_string(),
                color: (0.2, 0.4, 1.0),
                projectile_color: (0.2, 0.4, 1.0),
                damage_on_hit: 1.0,
                delay_between_shots: 0.4,
                velocity: 50.0,
                ..default()
            },
            WeaponDefinition {
                kind: WeaponType::Shield,
                letter: "O".to_string(),
                color: (0.3, 1.0, 1.0),
                ..default()
            },
        ])
    }
}

/// Install the weapon registry from `assets/data/weapons.ron`.
///
/// A registry that is already present wins; the duplicate is only logged.
pub fn load_weapon_registry(mut commands: Commands, existing: Option<Res<WeaponRegistry>>) {
    if existing.is_some() {
        warn!("Weapon registry already initialized, keeping the first one");
        return;
    }

    let registry = match WeaponRegistry::load_from(Path::new(WEAPONS_PATH)) {
        Ok(registry) => {
            info!("Loaded {} weapon definitions", registry.len());
            registry
        }
        Err(DataLoadError::FileNotFound(path)) => {
            warn!("Weapon definitions not found at {}, using built-in set", path);
            WeaponRegistry::builtin()
        }
        Err(e) => {
            error!("{}. Using built-in weapon set.", e);
            WeaponRegistry::builtin()
        }
    };

    commands.insert_resource(registry);
}
