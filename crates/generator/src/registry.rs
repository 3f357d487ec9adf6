//! In-memory registry of synthesized interfaces for one run

use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

use crate::synth::InterfaceModel;

/// Outcome of registering an interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryOutcome {
    /// First interface with this type name and slug
    Added,

    /// Replaced an earlier interface with the same type name
    Replaced,

    /// Replaced an earlier interface of another type name that maps to the same slug
    SlugCollision { previous: String },

    /// Not registered; its slug is empty, a path, or a reserved placeholder name
    Rejected { reason: String },
}

/// Interfaces keyed by source type name, iterated in sorted order
#[derive(Debug, Clone, Default)]
pub struct InterfaceRegistry {
    entries: BTreeMap<String, InterfaceModel>,
    reserved_slugs: Vec<String>,
    non_objects: BTreeSet<String>,
}

impl InterfaceRegistry {
    /// Create a registry that refuses the given reserved slugs
    pub fn new(reserved_slugs: Vec<String>) -> Self {
        Self {
            entries: BTreeMap::new(),
            reserved_slugs,
            non_objects: BTreeSet::new(),
        }
    }

    /// Register an interface, keeping exactly one interface per slug
    pub fn insert(&mut self, model: InterfaceModel) -> RegistryOutcome {
        if model.slug.is_empty() {
            warn!(
                "Not registering {:?}: its file name would be empty",
                model.type_name
            );
            return RegistryOutcome::Rejected {
                reason: "empty file name".to_string(),
            };
        }

        if !is_flat_module_name(&model.slug) {
            warn!(
                "Not registering {:?}: module name {:?} is not a plain file name",
                model.type_name, model.slug
            );
            return RegistryOutcome::Rejected {
                reason: format!("module name {:?} would leave the output directory", model.slug),
            };
        }

        if self.reserved_slugs.iter().any(|reserved| *reserved == model.slug) {
            warn!(
                "Not registering {}: {} is a reserved module name",
                model.type_name, model.slug
            );
            return RegistryOutcome::Rejected {
                reason: format!("reserved module name {}", model.slug),
            };
        }

        let colliding = self
            .entries
            .values()
            .find(|existing| existing.slug == model.slug && existing.type_name != model.type_name)
            .map(|existing| existing.type_name.clone());

        if let Some(previous) = colliding {
            warn!(
                "{} replaces {}: both map to module {}",
                model.type_name, previous, model.slug
            );
            self.entries.remove(&previous);
            self.entries.insert(model.type_name.clone(), model);
            return RegistryOutcome::SlugCollision { previous };
        }

        match self.entries.insert(model.type_name.clone(), model) {
            Some(previous) => {
                debug!("Replaced earlier definition of {}", previous.type_name);
                RegistryOutcome::Replaced
            }
            None => RegistryOutcome::Added,
        }
    }

    /// Remember a type name whose definition is not an object schema
    pub fn record_non_object(&mut self, type_name: &str) {
        self.non_objects.insert(type_name.to_string());
    }

    /// Whether `type_name` was defined without producing an interface
    pub fn is_non_object(&self, type_name: &str) -> bool {
        !self.entries.contains_key(type_name) && self.non_objects.contains(type_name)
    }

    /// Look up an interface by type name
    pub fn get(&self, type_name: &str) -> Option<&InterfaceModel> {
        self.entries.get(type_name)
    }

    /// Interfaces in type-name order
    pub fn iter(&self) -> impl Iterator<Item = &InterfaceModel> {
        self.entries.values()
    }

    /// Module slugs in type-name order
    pub fn slugs(&self) -> Vec<String> {
        self.entries.values().map(|model| model.slug.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Referenced type names that no registered interface provides
    pub fn unresolved_imports(&self) -> Vec<(String, String)> {
        let mut missing = Vec::new();
        for model in self.entries.values() {
            for import in &model.imports {
                if !self.entries.contains_key(import) {
                    missing.push((model.type_name.clone(), import.clone()));
                }
            }
        }
        missing
    }
}

/// A module name that stays a single entry inside the output directory
fn is_flat_module_name(slug: &str) -> bool {
    slug != "." && slug != ".." && !slug.contains(['/', '\\', '\0'])
}
