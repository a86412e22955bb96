//! Entity metadata definitions
//!
//! This module contains `EntityMetadata`, the root description of a record
//! type: its collection (table) name, primary key, fields, and
//! relationships.

use crate::field::FieldDefinition;
use crate::relationship::Relationship;
use phinxgen_core::{FieldType, GeneratorError, GeneratorResult, Validatable};
use serde::{Deserialize, Serialize};

// ============================================================================
// PrimaryKey
// ============================================================================

/// The primary key of an entity: one or more field names.
///
/// Deserializes from either a bare string (`"id"`) or a list of strings
/// (`["book_id", "author_id"]`). Compound keys disable auto-generated
/// identity columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PrimaryKeyRepr", into = "PrimaryKeyRepr")]
pub struct PrimaryKey(Vec<String>);

impl PrimaryKey {
    /// A single-column primary key
    pub fn single(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    /// A compound primary key
    pub fn compound(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// The declared key field names, in order
    pub fn fields(&self) -> &[String] {
        &self.0
    }

    /// The first declared key field, if any
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Check if this key spans more than one column
    pub fn is_compound(&self) -> bool {
        self.0.len() > 1
    }

    /// Check if no key fields were declared
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Wire representation: a bare string or a list of strings
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PrimaryKeyRepr {
    Single(String),
    Compound(Vec<String>),
}

impl From<PrimaryKeyRepr> for PrimaryKey {
    fn from(repr: PrimaryKeyRepr) -> Self {
        match repr {
            PrimaryKeyRepr::Single(name) => PrimaryKey(vec![name]),
            PrimaryKeyRepr::Compound(names) => PrimaryKey(names),
        }
    }
}

impl From<PrimaryKey> for PrimaryKeyRepr {
    fn from(key: PrimaryKey) -> Self {
        let mut names = key.0;
        if names.len() == 1 {
            PrimaryKeyRepr::Single(names.remove(0))
        } else {
            PrimaryKeyRepr::Compound(names)
        }
    }
}

// ============================================================================
// EntityMetadata
// ============================================================================

/// Declarative metadata for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Storage table name underlying the entity
    pub collection: String,

    /// Primary key field name(s)
    pub primary_key: PrimaryKey,

    /// Declared fields, in order
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,

    /// Declared relationships to other entities
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,
}

impl EntityMetadata {
    /// Create metadata for a collection with the given primary key
    pub fn new(collection: impl Into<String>, primary_key: PrimaryKey) -> Self {
        Self {
            collection: collection.into(),
            primary_key,
            fields: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Add a typed field
    pub fn with_field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.push(FieldDefinition::new(name, field_type));
        self
    }

    /// Add a pre-built field definition
    pub fn with_field_definition(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a relationship
    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// Get a field by name
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check if a field with the given name is declared
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }
}

impl Validatable for EntityMetadata {
    fn validate(&self) -> GeneratorResult<()> {
        if self.collection.is_empty() {
            return Err(GeneratorError::metadata_validation(
                &self.collection,
                "Collection name cannot be empty",
            ));
        }

        if self.primary_key.is_empty() {
            return Err(GeneratorError::metadata_validation(
                &self.collection,
                "Entity must declare a primary key",
            ));
        }

        for field in &self.fields {
            field.validate().map_err(|e| {
                GeneratorError::metadata_validation(&self.collection, e.to_string())
            })?;
        }

        // Check for duplicate field names
        let mut seen = std::collections::HashSet::new();
        for field in &self.fields {
            if !seen.insert(&field.name) {
                return Err(GeneratorError::metadata_validation(
                    &self.collection,
                    format!("Duplicate field name '{}'", field.name),
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
