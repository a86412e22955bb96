//! # Migration Generator Orchestrator
//!
//! The `MigrationGenerator` is the top-level entry point: it wires a
//! metadata provider, the compiler, the renderer, and the writer into
//! one pipeline.
//!
//! ## Pipeline
//!
//! ```text
//! entity id
//!     │
//!     ▼
//! TableCompiler::compile()   → CompiledMigration
//!     │
//!     ▼
//! SourceRenderer::render()   → source text
//!     │
//!     ▼
//! MigrationWriter::write()   → unique, timestamped file on disk
//! ```
//!
//! Entities are processed strictly sequentially; a failure on one entity
//! aborts the run.

use phinxgen_core::GeneratorResult;
use phinxgen_meta::MetadataProvider;

use crate::compiler::TableCompiler;
use crate::render::SourceRenderer;
use crate::writer::MigrationWriter;
use crate::{GeneratedMigration, GenerationOutcome, GeneratorConfig};

// ============================================================================
// MigrationGenerator
// ============================================================================

/// Generates migration files from entity metadata.
#[derive(Debug)]
pub struct MigrationGenerator<P> {
    provider: P,
    renderer: SourceRenderer,
    writer: MigrationWriter,
}

impl<P: MetadataProvider> MigrationGenerator<P> {
    /// Create a generator from a provider and configuration.
    ///
    /// Fails with a configuration error when the output directory is not
    /// usable, the template override cannot be read, or the base class
    /// name is invalid.
    pub fn new(provider: P, config: &GeneratorConfig) -> GeneratorResult<Self> {
        let mut renderer = SourceRenderer::new(config.base_class.as_str())?;
        if let Some(template) = &config.template_file {
            renderer = renderer.with_template_file(template)?;
        }
        let writer = MigrationWriter::new(&config.output_dir)?;

        Ok(Self {
            provider,
            renderer,
            writer,
        })
    }

    /// Generate and persist the migration for one entity
    pub fn generate_for(&self, entity_id: &str) -> GeneratorResult<GeneratedMigration> {
        let migration = TableCompiler::new(&self.provider).compile(entity_id)?;
        let source = self.renderer.render(&migration);
        let path = self.writer.write(&migration.class_name, &source)?;

        tracing::info!(
            entity = entity_id,
            class = %migration.class_name,
            path = %path.display(),
            "migration generated",
        );

        Ok(GeneratedMigration {
            class_name: migration.class_name,
            path,
            warnings: migration.warnings,
        })
    }

    /// Generate migrations for a list of entities, aborting on the first
    /// failure.
    pub fn generate_all(&self, entity_ids: &[String]) -> GeneratorResult<GenerationOutcome> {
        let mut outcome = GenerationOutcome::default();
        for entity_id in entity_ids {
            outcome.add(self.generate_for(entity_id)?);
        }
        Ok(outcome)
    }
}

// ============================================================================
// Tests
// ============================================================================
