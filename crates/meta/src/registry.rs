//! JSON-backed metadata registry
//!
//! This module provides `MetadataRegistry`, the production
//! [`MetadataProvider`] implementation: a map of entity identifier to
//! [`EntityMetadata`], loaded from (and saved to) a JSON document.
//!
//! Built in memory with [`insert`](MetadataRegistry::insert), it also
//! serves as the provider test double.

use crate::entity::EntityMetadata;
use crate::provider::MetadataProvider;
use phinxgen_core::{GeneratorError, GeneratorResult, Persistable, Validatable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

// ============================================================================
// MetadataRegistry
// ============================================================================

/// The set of known entities, keyed by identifier.
///
/// Entity identifiers are the names accepted on the command line; the
/// sorted identifier list is also the configured default generation list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataRegistry {
    /// Entity identifier -> metadata
    pub entities: BTreeMap<String, EntityMetadata>,
}

impl MetadataRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entity
    pub fn insert(&mut self, id: impl Into<String>, metadata: EntityMetadata) {
        self.entities.insert(id.into(), metadata);
    }

    /// Builder-style insert
    pub fn with_entity(mut self, id: impl Into<String>, metadata: EntityMetadata) -> Self {
        self.insert(id, metadata);
        self
    }

    /// Check if an entity identifier is known
    pub fn contains(&self, id: &str) -> bool {
        self.entities.contains_key(id)
    }

    /// All known entity identifiers, sorted
    pub fn entity_names(&self) -> Vec<String> {
        self.entities.keys().cloned().collect()
    }

    /// Number of registered entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Load a registry from a JSON file and validate its entries
    pub fn load(path: impl AsRef<Path>) -> GeneratorResult<Self> {
        let registry = Self::load_from_file(path.as_ref())?;
        registry.validate()?;
        Ok(registry)
    }
}

impl Persistable for MetadataRegistry {
    fn file_extension() -> &'static str {
        "json"
    }
}

impl Validatable for MetadataRegistry {
    fn validate(&self) -> GeneratorResult<()> {
        for metadata in self.entities.values() {
            metadata.validate()?;
        }
        Ok(())
    }
}

impl MetadataProvider for MetadataRegistry {
    fn entity_metadata(&self, entity: &str) -> GeneratorResult<EntityMetadata> {
        self.entities
            .get(entity)
            .cloned()
            .ok_or_else(|| GeneratorError::EntityNotFound(entity.to_string()))
    }

    fn intermediary_metadata(&self, join_table: &str) -> GeneratorResult<EntityMetadata> {
        self.entities
            .values()
            .find(|m| m.collection == join_table)
            .cloned()
            .ok_or_else(|| GeneratorError::EntityNotFound(join_table.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
