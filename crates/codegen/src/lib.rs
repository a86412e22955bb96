//! # Phinxgen Codegen
//!
//! Migration compilation and rendering engine for phinxgen.
//!
//! This crate turns declarative entity metadata into Phinx migration
//! source files:
//!
//! - **Compilation**: `TableCompiler` normalizes one entity (and its
//!   many-to-many join tables) into ordered table definitions
//! - **Rendering**: `SourceRenderer` substitutes the compiled tables into
//!   the migration class template
//! - **Writing**: `MigrationWriter` persists the source under a unique,
//!   timestamp-prefixed file name
//! - **Orchestration**: `MigrationGenerator` runs the full pipeline per
//!   entity
//!

// ============================================================================
// Modules
// ============================================================================

pub mod compiler;
pub mod generator;
pub mod render;
pub mod table;
pub mod writer;

// ============================================================================
// Re-exports
// ============================================================================

pub use compiler::TableCompiler;
pub use generator::MigrationGenerator;
pub use render::{DEFAULT_BASE_CLASS, DEFAULT_TEMPLATE, SourceRenderer};
pub use table::{Column, ColumnOptions, CompiledMigration, IdStrategy, TableDefinition};
pub use writer::MigrationWriter;

use std::path::PathBuf;

// ============================================================================
// GeneratorConfig
// ============================================================================

/// Configuration for the migration generator
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory migration files are written to
    pub output_dir: PathBuf,

    /// Optional template override; the bundled template is used otherwise
    pub template_file: Option<PathBuf>,

    /// Fully-qualified base migration class of the target runner
    pub base_class: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./migrations"),
            template_file: None,
            base_class: DEFAULT_BASE_CLASS.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set a template file override
    pub fn with_template_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_file = Some(path.into());
        self
    }

    /// Set the base migration class
    pub fn with_base_class(mut self, base_class: impl Into<String>) -> Self {
        self.base_class = base_class.into();
        self
    }
}

// ============================================================================
// GeneratedMigration
// ============================================================================

/// One migration file produced by the generator
#[derive(Debug, Clone)]
pub struct GeneratedMigration {
    /// Generated class name
    pub class_name: String,

    /// Path of the written file
    pub path: PathBuf,

    /// Warnings collected while compiling this entity
    pub warnings: Vec<String>,
}

// ============================================================================
// GenerationOutcome
// ============================================================================

/// Collected results of one generation run
#[derive(Debug, Clone, Default)]
pub struct GenerationOutcome {
    /// All generated migrations, in generation order
    pub generated: Vec<GeneratedMigration>,
}

impl GenerationOutcome {
    /// Record one generated migration
    pub fn add(&mut self, migration: GeneratedMigration) {
        self.generated.push(migration);
    }

    /// Number of files written
    pub fn file_count(&self) -> usize {
        self.generated.len()
    }

    /// All warnings across the run
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.generated
            .iter()
            .flat_map(|m| m.warnings.iter())
            .map(String::as_str)
    }

    /// Check if any warnings were collected
    pub fn has_warnings(&self) -> bool {
        self.generated.iter().any(|m| !m.warnings.is_empty())
    }
}

// ============================================================================
// Tests
// ============================================================================
