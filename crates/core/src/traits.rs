//! Core traits for phinxgen
//!
//! This module defines the traits that components throughout the generator
//! implement for validation and file persistence.

use crate::error::GeneratorResult;
use serde::{Serialize, de::DeserializeOwned};

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `GeneratorError` describing the
    /// problem.
    fn validate(&self) -> GeneratorResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// ============================================================================
// Persistable Trait
// ============================================================================

/// Trait for types that can be serialized to and deserialized from files
///
/// Types implementing this trait can be saved to and loaded from
/// JSON documents on disk.
pub trait Persistable: Serialize + DeserializeOwned + Sized {
    /// Get the file extension for this type (without the dot)
    fn file_extension() -> &'static str;

    /// Save to a JSON string
    fn to_json(&self) -> GeneratorResult<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Load from a JSON string
    fn from_json(json: &str) -> GeneratorResult<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Save to a file
    fn save_to_file(&self, path: &std::path::Path) -> GeneratorResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| crate::error::GeneratorError::FileWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from a file
    fn load_from_file(path: &std::path::Path) -> GeneratorResult<Self> {
        let json =
            std::fs::read_to_string(path).map_err(|e| crate::error::GeneratorError::FileRead {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Self::from_json(&json)
    }
}

// ============================================================================
// Tests
// ============================================================================
