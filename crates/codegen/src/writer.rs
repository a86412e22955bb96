//! Migration file writer
//!
//! Persists rendered migration source under the target runner's naming
//! convention: a UTC timestamp prefix plus the snake-cased class name.
//! Class names must be CamelCase and unique against the migration files
//! already present in the output directory.

use chrono::Utc;
use heck::{ToSnakeCase, ToUpperCamelCase};
use phinxgen_core::{GeneratorError, GeneratorResult};
use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

/// Migration file names: `<timestamp>_<snake_case_class>.php`
static MIGRATION_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+_([a-z0-9_]+)\.php$").expect("hard-coded pattern"));

/// Valid migration class names per the runner's convention
static CLASS_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z][a-z0-9]+)+$").expect("hard-coded pattern"));

// ============================================================================
// MigrationWriter
// ============================================================================

/// Writes rendered migrations into the output directory.
#[derive(Debug, Clone)]
pub struct MigrationWriter {
    output_dir: PathBuf,
}

impl MigrationWriter {
    /// Create a writer over an existing output directory
    pub fn new(output_dir: impl Into<PathBuf>) -> GeneratorResult<Self> {
        let output_dir = output_dir.into();
        if !output_dir.is_dir() {
            return Err(GeneratorError::InvalidOutputDir(output_dir));
        }
        Ok(Self { output_dir })
    }

    /// The configured output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Persist one rendered migration.
    ///
    /// Fails with a naming error when the class name does not follow the
    /// runner's convention or collides with an existing migration file.
    pub fn write(&self, class_name: &str, contents: &str) -> GeneratorResult<PathBuf> {
        if !is_valid_class_name(class_name) {
            return Err(GeneratorError::InvalidClassName(class_name.to_string()));
        }
        if self.existing_class_names()?.contains(class_name) {
            return Err(GeneratorError::DuplicateClassName(class_name.to_string()));
        }

        let path = self.output_dir.join(class_name_to_file_name(class_name));
        std::fs::write(&path, contents).map_err(|e| GeneratorError::FileWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(path)
    }

    /// Class names of the migration files already in the output directory
    pub fn existing_class_names(&self) -> GeneratorResult<HashSet<String>> {
        let mut names = HashSet::new();
        for entry in WalkDir::new(&self.output_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            if let Some(captures) = MIGRATION_FILE_RE.captures(file_name) {
                names.insert(captures[1].to_upper_camel_case());
            }
        }
        Ok(names)
    }
}

// ============================================================================
// Naming helpers
// ============================================================================

/// Check a class name against the runner's CamelCase convention
pub fn is_valid_class_name(class_name: &str) -> bool {
    CLASS_NAME_RE.is_match(class_name)
}

/// Map a class name to its timestamped migration file name
pub fn class_name_to_file_name(class_name: &str) -> String {
    format!(
        "{}_{}.php",
        Utc::now().format("%Y%m%d%H%M%S"),
        class_name.to_snake_case()
    )
}

// ============================================================================
// Tests
// ============================================================================
