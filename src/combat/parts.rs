//! Destructible sub-parts of multi-part enemies.

use bevy::prelude::*;

/// One destructible piece of an enemy.
#[derive(Debug, Clone)]
pub struct Part {
    pub name: String,
    pub health: f32,
    /// Names of parts that must be destroyed before this one takes damage
    pub protected_by: Vec<String>,
    /// Collider entity that represents this part in the world
    pub entity: Option<Entity>,
}

impl Part {
    pub fn new(name: impl Into<String>, health: f32) -> Self {
        Self {
            name: name.into(),
            health,
            protected_by: Vec::new(),
            entity: None,
        }
    }

    pub fn protected_by(mut self, names: &[&str]) -> Self {
        self.protected_by = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entity = Some(entity);
        self
    }

    pub fn is_destroyed(&self) -> bool {
        self.health <= 0.0
    }
}

/// All parts of a multi-part enemy. Lookups are linear scans.
#[derive(Component, Debug, Clone, Default)]
pub struct Parts {
    pub parts: Vec<Part>,
}

impl Parts {
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.name == name)
    }

    pub fn index_of_entity(&self, entity: Entity) -> Option<usize> {
        self.parts.iter().position(|p| p.entity == Some(entity))
    }

    /// A part that can't be found counts as destroyed.
    pub fn is_part_destroyed(&self, name: &str) -> bool {
        self.find_by_name(name).map_or(true, Part::is_destroyed)
    }

    /// Whether any protector of the part at `index` is still standing.
    pub fn is_shielded(&self, index: usize) -> bool {
        self.parts.get(index).is_some_and(|part| {
            part.protected_by
                .iter()
                .any(|name| !self.is_part_destroyed(name))
        })
    }

    pub fn all_destroyed(&self) -> bool {
        self.parts.iter().all(Part::is_destroyed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts() -> Parts {
        Parts::new(vec![
            Part::new("core", 10.0).protected_by(&["wing_l", "wing_r"]),
            Part::new("wing_l", 2.0),
            Part::new("wing_r", 0.0),
        ])
    }

    #[test]
    fn unknown_part_counts_as_destroyed() {
        let parts = parts();
        assert!(parts.is_part_destroyed("cockpit"));
        assert!(parts.is_part_destroyed("wing_r"));
        assert!(!parts.is_part_destroyed("wing_l"));
    }

    #[test]
    fn shielded_while_any_protector_stands() {
        let mut parts = parts();
        assert!(parts.is_shielded(0));
        parts.parts[1].health = 0.0;
        assert!(!parts.is_shielded(0));
        assert!(!parts.is_shielded(1));
    }

    #[test]
    fn protector_names_that_do_not_exist_never_shield() {
        let parts = Parts::new(vec![Part::new("core", 1.0).protected_by(&["ghost"])]);
        assert!(!parts.is_shielded(0));
    }

    #[test]
    fn lookup_by_entity() {
        let e = Entity::from_raw(7);
        let parts = Parts::new(vec![Part::new("a", 1.0), Part::new("b", 1.0).with_entity(e)]);
        assert_eq!(parts.index_of_entity(e), Some(1));
        assert_eq!(parts.index_of_entity(Entity::from_raw(8)), None);
    }
}
