//! Relationship definitions between entities
//!
//! This module contains the `Relationship` struct describing a connection
//! from one entity to another in the metadata model.

use phinxgen_core::RelationKind;
use serde::{Deserialize, Serialize};

// ============================================================================
// Relationship
// ============================================================================

/// A relationship declared on an entity.
///
/// The kind is optional at the metadata level so that malformed input can
/// be loaded and reported by the compiler as a metadata error rather than
/// rejected wholesale. For many-to-many relationships, `entity` names the
/// related entity in the registry and `join_table` names the synthesized
/// intermediary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Relationship {
    /// Relationship kind, if declared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RelationKind>,

    /// Foreign key field on this entity, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_field: Option<String>,

    /// Foreign key field on the related entity, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_field: Option<String>,

    /// Join table name (many-to-many only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_table: Option<String>,

    /// Related entity identifier (many-to-many only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
}

impl Relationship {
    /// Create a one-to-one relationship
    pub fn one_to_one() -> Self {
        Self {
            kind: Some(RelationKind::OneToOne),
            ..Self::default()
        }
    }

    /// Create a one-to-many relationship
    pub fn one_to_many() -> Self {
        Self {
            kind: Some(RelationKind::OneToMany),
            ..Self::default()
        }
    }

    /// Create a many-to-many relationship through a join table
    pub fn many_to_many(entity: impl Into<String>, join_table: impl Into<String>) -> Self {
        Self {
            kind: Some(RelationKind::ManyToMany),
            entity: Some(entity.into()),
            join_table: Some(join_table.into()),
            ..Self::default()
        }
    }

    /// Set the local foreign key field name
    pub fn with_local_field(mut self, field: impl Into<String>) -> Self {
        self.local_field = Some(field.into());
        self
    }

    /// Set the remote foreign key field name
    pub fn with_remote_field(mut self, field: impl Into<String>) -> Self {
        self.remote_field = Some(field.into());
        self
    }

    /// Check if this is a many-to-many relationship
    pub fn is_many_to_many(&self) -> bool {
        self.kind == Some(RelationKind::ManyToMany)
    }
}

// ============================================================================
// Tests
// ============================================================================
