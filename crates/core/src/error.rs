//! Error types for phinxgen
//!
//! This module provides unified error handling across the whole generator,
//! covering configuration, metadata, schema, naming, and IO failures.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for phinxgen
#[derive(Debug, Error)]
pub enum GeneratorError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Output directory is missing or not usable
    #[error("The output directory '{0}' is not a directory or is not writable")]
    InvalidOutputDir(PathBuf),

    /// Template file could not be found
    #[error("No template file found at '{0}'")]
    TemplateNotFound(PathBuf),

    /// Template file exists but could not be read
    #[error("The template file '{path}' is not readable: {message}")]
    TemplateUnreadable { path: PathBuf, message: String },

    /// Base migration class name is not a valid fully-qualified class name
    #[error("The base migration class '{0}' is not a valid class name")]
    InvalidBaseClass(String),

    // ========================================================================
    // Metadata Errors
    // ========================================================================
    /// Entity is not present in the metadata registry
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    /// Relationship metadata did not declare a kind
    #[error("A relationship on entity '{entity}' is missing its kind")]
    MissingRelationshipKind { entity: String },

    /// Many-to-many relationship did not name the related entity
    #[error("A many-to-many relationship on entity '{entity}' is missing the related entity")]
    MissingRelatedEntity { entity: String },

    /// Many-to-many relationship did not name its join table
    #[error("A many-to-many relationship on entity '{entity}' is missing its join table")]
    MissingJoinTable { entity: String },

    // ========================================================================
    // Schema Errors
    // ========================================================================
    /// Declared primary key has no matching field
    #[error("The primary key '{key}' for table '{collection}' could not be found in the list of fields")]
    PrimaryKeyNotFound { key: String, collection: String },

    /// Primary key field exists but carries no type metadata
    #[error("The field metadata for the primary key '{key}' on table '{collection}' is malformed: no field type found")]
    PrimaryKeyTypeMissing { key: String, collection: String },

    // ========================================================================
    // Field Type Errors
    // ========================================================================
    /// Field type token is not part of the fixed type map
    #[error("An unrecognised field type was detected: '{0}'")]
    UnknownFieldType(String),

    // ========================================================================
    // Naming Errors
    // ========================================================================
    /// Generated class name does not follow the migration naming convention
    #[error("The class name '{0}' is not a valid migration class name")]
    InvalidClassName(String),

    /// Generated class name collides with an existing migration
    #[error("The class name '{0}' already exists in the output directory")]
    DuplicateClassName(String),

    // ========================================================================
    // IO / Serialization Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Metadata validation failed
    #[error("Metadata validation failed for '{entity}': {message}")]
    MetadataValidation { entity: String, message: String },
}

impl GeneratorError {
    /// Create a metadata validation error
    pub fn metadata_validation(entity: impl Into<String>, msg: impl Into<String>) -> Self {
        GeneratorError::MetadataValidation {
            entity: entity.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GeneratorError::InvalidOutputDir(_)
                | GeneratorError::TemplateNotFound(_)
                | GeneratorError::TemplateUnreadable { .. }
                | GeneratorError::InvalidBaseClass(_)
        )
    }

    /// Check if this error is a metadata error
    pub fn is_metadata(&self) -> bool {
        matches!(
            self,
            GeneratorError::EntityNotFound(_)
                | GeneratorError::MissingRelationshipKind { .. }
                | GeneratorError::MissingRelatedEntity { .. }
                | GeneratorError::MissingJoinTable { .. }
                | GeneratorError::MetadataValidation { .. }
        )
    }

    /// Check if this error is a schema error
    pub fn is_schema(&self) -> bool {
        matches!(
            self,
            GeneratorError::PrimaryKeyNotFound { .. }
                | GeneratorError::PrimaryKeyTypeMissing { .. }
        )
    }

    /// Check if this error is a naming error
    pub fn is_naming(&self) -> bool {
        matches!(
            self,
            GeneratorError::InvalidClassName(_) | GeneratorError::DuplicateClassName(_)
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            GeneratorError::Io(_)
                | GeneratorError::FileRead { .. }
                | GeneratorError::FileWrite { .. }
        )
    }
}

/// Result type alias using GeneratorError
pub type GeneratorResult<T> = Result<T, GeneratorError>;

// ============================================================================
// Tests
// ============================================================================
