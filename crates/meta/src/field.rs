//! Field definitions for entity metadata
//!
//! This module contains the `FieldDefinition` struct describing a single
//! declared field (column) of an entity.

use phinxgen_core::{FieldType, GeneratorError, GeneratorResult, Validatable};
use serde::{Deserialize, Serialize};

// ============================================================================
// FieldDefinition
// ============================================================================

/// A single declared field on an entity.
///
/// A field without a type is tolerated at the metadata level; the compiler
/// skips it at render time and records a warning. The auto-increment flag
/// is only meaningful for integer primary keys and is treated as `true`
/// when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name (column name, typically snake_case)
    pub name: String,

    /// Declared data type, if any
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,

    /// Whether an integer primary key auto-increments (defaults to true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_increment: Option<bool>,
}

impl FieldDefinition {
    /// Create a new typed field
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type: Some(field_type),
            auto_increment: None,
        }
    }

    /// Create a field with no type metadata
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: None,
            auto_increment: None,
        }
    }

    /// Set the auto-increment flag
    pub fn with_auto_increment(mut self, auto_increment: bool) -> Self {
        self.auto_increment = Some(auto_increment);
        self
    }

    /// Effective auto-increment behavior (absent means enabled)
    pub fn auto_increments(&self) -> bool {
        self.auto_increment.unwrap_or(true)
    }

    /// Check if this field declares the integer type
    pub fn is_integer(&self) -> bool {
        self.field_type.is_some_and(|t| t.is_int())
    }
}

impl Validatable for FieldDefinition {
    fn validate(&self) -> GeneratorResult<()> {
        if self.name.is_empty() {
            return Err(GeneratorError::metadata_validation(
                "<field>",
                "Field name cannot be empty",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_definition_new() {
        let field = FieldDefinition::new("title", FieldType::String);
        assert_eq!(field.name, "title");
        assert_eq!(field.field_type, Some(FieldType::String));
        assert!(field.auto_increments());
    }

    #[test]
    fn test_untyped_field() {
        let field = FieldDefinition::untyped("mystery");
        assert!(field.field_type.is_none());
        assert!(!field.is_integer());
        assert!(field.is_valid());
    }

    #[test]
    fn test_auto_increment_flag() {
        let field = FieldDefinition::new("id", FieldType::Int).with_auto_increment(false);
        assert!(!field.auto_increments());
        assert!(field.is_integer());
    }

    #[test]
    fn test_empty_name_is_invalid() {
        assert!(!FieldDefinition::untyped("").is_valid());
    }

    #[test]
    fn test_field_serde() {
        let json = r#"{"name": "id", "type": "int", "auto_increment": false}"#;
        let field: FieldDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(field.field_type, Some(FieldType::Int));
        assert_eq!(field.auto_increment, Some(false));

        // type and auto_increment are both optional
        let field: FieldDefinition = serde_json::from_str(r#"{"name": "notes"}"#).unwrap();
        assert!(field.field_type.is_none());
        assert!(field.auto_increments());
    }
}
