//! Core types used throughout phinxgen
//!
//! This module contains the field type system shared by the metadata layer
//! and the code generator: declared field types, the Phinx column types
//! they map to, and relationship kinds.

use crate::error::GeneratorError;
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;

// ============================================================================
// Field Types
// ============================================================================

/// Data types a metadata field can declare.
///
/// Each variant maps 1:1 onto a Phinx column type via
/// [`column_type`](FieldType::column_type). The token form used in metadata
/// files is the lowercase variant name (`"string"`, `"int"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Short text (VARCHAR)
    String,
    /// Integer
    Int,
    /// Floating point number
    Float,
    /// Boolean true/false
    Bool,
    /// Serialized array / blob content, stored as long-form text
    Array,
    /// Date and time
    DateTime,
}

impl FieldType {
    /// Map to the Phinx column type this field is rendered as.
    ///
    /// This is the fixed type map; it is total over the enum, so every
    /// parsed field type has a target column type.
    pub fn column_type(&self) -> ColumnType {
        match self {
            FieldType::String => ColumnType::String,
            FieldType::Int => ColumnType::Integer,
            FieldType::Float => ColumnType::Float,
            FieldType::Bool => ColumnType::Boolean,
            FieldType::Array => ColumnType::Text,
            FieldType::DateTime => ColumnType::DateTime,
        }
    }

    /// Check if this is the integer type (the only type eligible for
    /// identity columns).
    pub fn is_int(&self) -> bool {
        matches!(self, FieldType::Int)
    }

    /// The token used for this type in metadata files
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
            FieldType::Array => "array",
            FieldType::DateTime => "datetime",
        }
    }

    /// Get all field types
    pub fn all() -> &'static [FieldType] {
        &[
            FieldType::String,
            FieldType::Int,
            FieldType::Float,
            FieldType::Bool,
            FieldType::Array,
            FieldType::DateTime,
        ]
    }
}

impl FromStr for FieldType {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(FieldType::String),
            "int" => Ok(FieldType::Int),
            "float" => Ok(FieldType::Float),
            "bool" => Ok(FieldType::Bool),
            "array" => Ok(FieldType::Array),
            "datetime" => Ok(FieldType::DateTime),
            other => Err(GeneratorError::UnknownFieldType(other.to_string())),
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Column Types
// ============================================================================

/// Column types understood by the Phinx table builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    String,
    Integer,
    Float,
    Boolean,
    Text,
    DateTime,
}

impl ColumnType {
    /// The type token passed to `$table->addColumn()`
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Boolean => "boolean",
            ColumnType::Text => "text",
            ColumnType::DateTime => "datetime",
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Relationship Kinds
// ============================================================================

/// Entity relationship kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// One record relates to exactly one other record
    OneToOne,
    /// One record relates to many others
    OneToMany,
    /// Many-to-many through a join table
    ManyToMany,
}

impl RelationKind {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            RelationKind::OneToOne => "one to one",
            RelationKind::OneToMany => "one to many",
            RelationKind::ManyToMany => "many to many",
        }
    }

    /// Check if this kind requires a join table
    pub fn requires_join_table(&self) -> bool {
        matches!(self, RelationKind::ManyToMany)
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Tests
// ============================================================================
