//! Enemy data loading from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::{parse_ron, read_data_file, DataLoadError};
use crate::weapons::WeaponType;

pub const ENEMIES_DIR: &str = "assets/data/enemies";

/// Movement strategy as written in a definition file.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub enum MovementDef {
    LinearDescent { speed: f32 },
    /// Wander between random points, `duration` seconds per leg
    Waypoint { duration: f32 },
}

/// One destructible part of a multi-part enemy.
#[derive(Deserialize, Clone, Debug)]
pub struct PartDef {
    pub name: String,
    pub health: f32,
    #[serde(default)]
    pub protected_by: Vec<String>,
    #[serde(default)]
    pub offset: (f32, f32),
    pub size: (f32, f32),
    #[serde(default)]
    pub color: Option<(f32, f32, f32)>,
}

/// A weapon mounted on an enemy; always fires downward.
#[derive(Deserialize, Clone, Debug)]
pub struct MountedWeaponDef {
    pub kind: WeaponType,
    #[serde(default)]
    pub offset: (f32, f32),
}

/// Enemy definition loaded from RON file.
#[derive(Deserialize, Clone, Debug)]
pub struct EnemyDefinition {
    pub name: String,
    /// Body health; ignored when `parts` is non-empty
    #[serde(default)]
    pub health: f32,
    pub score: u32,
    pub drop_chance: f32,
    pub radius: f32,
    #[serde(default = "default_color")]
    pub color: (f32, f32, f32),
    pub movement: MovementDef,
    #[serde(default)]
    pub parts: Vec<PartDef>,
    #[serde(default)]
    pub weapon: Option<MountedWeaponDef>,
}

fn default_color() -> (f32, f32, f32) {
    (0.8, 0.3, 0.3)
}

impl EnemyDefinition {
    pub fn from_ron(path: &str, contents: &str) -> Result<Self, DataLoadError> {
        let definition: Self = parse_ron(path, contents)?;
        definition.validate(path)?;
        Ok(definition)
    }

    pub fn is_multi_part(&self) -> bool {
        !self.parts.is_empty()
    }

    pub fn color(&self) -> Color {
        Color::srgb(self.color.0, self.color.1, self.color.2)
    }

    fn validate(&self, path: &str) -> Result<(), DataLoadError> {
        let invalid = |details: String| DataLoadError::InvalidValue {
            path: path.to_string(),
            details,
        };

        if !(0.0..=1.0).contains(&self.drop_chance) {
            return Err(invalid(format!(
                "drop_chance {} is outside [0, 1]",
                self.drop_chance
            )));
        }
        if !self.is_multi_part() && self.health <= 0.0 {
            return Err(invalid(format!("'{}' needs positive health", self.name)));
        }
        if let Some(part) = self.parts.iter().find(|p| p.health <= 0.0) {
            return Err(invalid(format!("part '{}' needs positive health", part.name)));
        }
        Ok(())
    }
}

/// Resource holding all loaded enemy definitions.
#[derive(Resource, Default)]
pub struct EnemyRegistry {
    pub definitions: HashMap<String, EnemyDefinition>,
}

impl EnemyRegistry {
    /// Get an enemy definition by type name.
    pub fn get(&self, enemy_type: &str) -> Option<&EnemyDefinition> {
        self.definitions.get(enemy_type)
    }

    /// Type names in a stable order, for random picks.
    pub fn types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// Compiled-in enemies used when no data files exist.
    pub fn builtin() -> Self {
        let mut definitions = HashMap::new();
        definitions.insert(
            "descender".to_string(),
            EnemyDefinition {
                name: "Descender".to_string(),
                health: 10.0,
                score: 100,
                drop_chance: 0.5,
                radius: 2.5,
                color: default_color(),
                movement: MovementDef::LinearDescent { speed: 10.0 },
                parts: Vec::new(),
                weapon: None,
            },
        );
        let part = |name: &str, health: f32, protected_by: &[&str], offset: (f32, f32), size: (f32, f32)| PartDef {
            name: name.to_string(),
            health,
            protected_by: protected_by.iter().map(|n| n.to_string()).collect(),
            offset,
            size,
            color: None,
        };
        definitions.insert(
            "wanderer".to_string(),
            EnemyDefinition {
                name: "Wanderer".to_string(),
                health: 0.0,
                score: 500,
                drop_chance: 1.0,
                radius: 4.0,
                color: (0.6, 0.6, 0.7),
                movement: MovementDef::Waypoint { duration: 4.0 },
                parts: vec![
                    part("fuselage", 10.0, &[], (0.0, 0.0), (2.0, 4.0)),
                    part("cockpit", 10.0, &["fuselage"], (0.0, 1.0), (1.0, 1.0)),
                    part("wing_l", 10.0, &[], (-2.5, 0.0), (3.0, 1.5)),
                    part("wing_r", 10.0, &[], (2.5, 0.0), (3.0, 1.5)),
                ],
                weapon: None,
            },
        );
        Self { definitions }
    }

    /// Load every `*.ron` file in a directory. Bad files are logged and skipped.
    pub fn load_dir(dir: &Path) -> Result<Self, DataLoadError> {
        if !dir.exists() {
            return Err(DataLoadError::FileNotFound(dir.display().to_string()));
        }
        let entries = fs::read_dir(dir).map_err(|e| DataLoadError::ReadError {
            path: dir.display().to_string(),
            details: e.to_string(),
        })?;

        let mut registry = Self::default();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "ron") {
                continue;
            }

            let enemy_type = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown")
                .to_string();

            let loaded = read_data_file(&path)
                .and_then(|contents| EnemyDefinition::from_ron(&path.display().to_string(), &contents));
            match loaded {
                Ok(definition) => {
                    info!("Loaded enemy definition: {} ({})", definition.name, enemy_type);
                    registry.definitions.insert(enemy_type, definition);
                }
                Err(e) => error!("Skipping enemy definition: {}", e),
            }
        }
        Ok(registry)
    }
}

/// Load all enemy definitions from the assets/data/enemies/ directory.
pub fn load_enemy_definitions(mut commands: Commands) {
    let registry = match EnemyRegistry::load_dir(Path::new(ENEMIES_DIR)) {
        Ok(registry) if !registry.definitions.is_empty() => registry,
        Ok(_) => {
            warn!("No enemy definitions in {}, using built-in enemies", ENEMIES_DIR);
            EnemyRegistry::builtin()
        }
        Err(e) => {
            warn!("{}. Using built-in enemies.", e);
            EnemyRegistry::builtin()
        }
    };

    info!("Loaded {} enemy definitions", registry.definitions.len());
    commands.insert_resource(registry);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multi_part_enemy() {
        let text = r#"(
            name: "Wanderer",
            score: 500,
            drop_chance: 1.0,
            radius: 4.0,
            movement: Waypoint(duration: 4.0),
            parts: [
                (name: "fuselage", health: 10.0, size: (2.0, 4.0)),
                (name: "cockpit", health: 10.0, protected_by: ["fuselage"], offset: (0.0, 1.0), size: (1.0, 1.0)),
            ],
        )"#;
        let def = EnemyDefinition::from_ron("wanderer.ron", text).unwrap();
        assert!(def.is_multi_part());
        assert_eq!(def.parts[1].protected_by, vec!["fuselage".to_string()]);
        assert_eq!(def.movement, MovementDef::Waypoint { duration: 4.0 });
        assert!(def.weapon.is_none());
    }

    #[test]
    fn parses_armed_enemy() {
        let text = r#"(
            name: "Gunship",
            health: 5.0,
            score: 200,
            drop_chance: 0.2,
            radius: 2.0,
            movement: LinearDescent(speed: 6.0),
            weapon: Some((kind: Blaster, offset: (0.0, -1.5))),
        )"#;
        let def = EnemyDefinition::from_ron("gunship.ron", text).unwrap();
        let weapon = def.weapon.unwrap();
        assert_eq!(weapon.kind, WeaponType::Blaster);
        assert_eq!(weapon.offset, (0.0, -1.5));
    }

    #[test]
    fn rejects_bad_drop_chance() {
        let text = r#"(name: "X", health: 1.0, score: 1, drop_chance: 1.5, radius: 1.0,
                       movement: LinearDescent(speed: 1.0))"#;
        let err = EnemyDefinition::from_ron("x.ron", text).unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { .. }));
    }

    #[test]
    fn rejects_single_body_without_health() {
        let text = r#"(name: "X", score: 1, drop_chance: 0.5, radius: 1.0,
                       movement: LinearDescent(speed: 1.0))"#;
        assert!(EnemyDefinition::from_ron("x.ron", text).is_err());
    }

    #[test]
    fn builtin_set_is_valid() {
        let registry = EnemyRegistry::builtin();
        assert_eq!(registry.types(), vec!["descender", "wanderer"]);
        for def in registry.definitions.values() {
            def.validate("builtin").unwrap();
        }
    }
}
