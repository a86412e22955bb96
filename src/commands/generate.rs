//! The `generate` command
//!
//! Resolves the requested entity list against the metadata registry and
//! runs the compile/render/write pipeline once per entity. Explicitly
//! requested names are validated up front: if any are unknown, they are
//! all reported and nothing is generated.

use anyhow::{Context, bail};
use phinxgen_codegen::{GeneratorConfig, MigrationGenerator};
use phinxgen_meta::MetadataRegistry;
use std::path::PathBuf;

/// Inputs of one `generate` invocation
#[derive(Debug)]
pub struct GenerateOptions {
    /// Metadata registry file
    pub schema: PathBuf,

    /// Requested entity identifiers; empty means every known entity
    pub entities: Vec<String>,

    /// Directory migration files are written to
    pub output_dir: PathBuf,

    /// Migration template override
    pub template: Option<PathBuf>,

    /// Base migration class of the target runner
    pub base_class: String,
}

pub fn run(options: GenerateOptions) -> anyhow::Result<()> {
    let registry = MetadataRegistry::load(&options.schema).with_context(|| {
        format!(
            "failed to load metadata registry from '{}'",
            options.schema.display()
        )
    })?;

    let requested = if options.entities.is_empty() {
        registry.entity_names()
    } else {
        options.entities.clone()
    };

    let unknown = unrecognized_entities(&registry, &requested);
    if !unknown.is_empty() {
        bail!(
            "unrecognized entities (not present in '{}'): {}",
            options.schema.display(),
            unknown.join(", ")
        );
    }

    let mut config = GeneratorConfig::new()
        .with_output_dir(options.output_dir)
        .with_base_class(options.base_class);
    if let Some(template) = options.template {
        config = config.with_template_file(template);
    }

    let generator = MigrationGenerator::new(registry, &config)?;

    let mut counter = 0usize;
    for entity in &requested {
        println!("Generating migration for {entity}");
        let generated = generator.generate_for(entity)?;
        for warning in &generated.warnings {
            eprintln!("warning: {warning}");
        }
        counter += 1;
    }

    let message = if counter == 1 {
        "migration was generated"
    } else {
        "migrations were generated"
    };
    println!();
    println!("Done - {counter} {message}");

    Ok(())
}

/// Requested identifiers that are not present in the registry
fn unrecognized_entities(registry: &MetadataRegistry, requested: &[String]) -> Vec<String> {
    requested
        .iter()
        .filter(|id| !registry.contains(id))
        .cloned()
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use phinxgen_core::{FieldType, Persistable};
    use phinxgen_meta::{EntityMetadata, PrimaryKey};

    fn sample_registry() -> MetadataRegistry {
        MetadataRegistry::new()
            .with_entity(
                "Book",
                EntityMetadata::new("books", PrimaryKey::single("id"))
                    .with_field("id", FieldType::Int)
                    .with_field("title", FieldType::String),
            )
            .with_entity(
                "Author",
                EntityMetadata::new("authors", PrimaryKey::single("id"))
                    .with_field("id", FieldType::Int),
            )
    }

    fn write_registry(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("entities.json");
        sample_registry().save_to_file(&path).unwrap();
        path
    }

    fn migration_files(dir: &std::path::Path) -> Vec<String> {
        let mut files: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        files.sort();
        files
    }

    #[test]
    fn test_unrecognized_entities() {
        let registry = sample_registry();
        let requested = vec![
            "Book".to_string(),
            "Ghost".to_string(),
            "Phantom".to_string(),
        ];
        assert_eq!(
            unrecognized_entities(&registry, &requested),
            ["Ghost", "Phantom"]
        );
        assert!(unrecognized_entities(&registry, &["Book".to_string()]).is_empty());
    }

    #[test]
    fn test_run_generates_requested_entity() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("migrations");
        std::fs::create_dir(&out).unwrap();

        run(GenerateOptions {
            schema: write_registry(dir.path()),
            entities: vec!["Book".to_string()],
            output_dir: out.clone(),
            template: None,
            base_class: phinxgen_codegen::DEFAULT_BASE_CLASS.to_string(),
        })
        .unwrap();

        let files = migration_files(&out);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("_book_migration.php"));
    }

    #[test]
    fn test_run_defaults_to_all_entities() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("migrations");
        std::fs::create_dir(&out).unwrap();

        run(GenerateOptions {
            schema: write_registry(dir.path()),
            entities: Vec::new(),
            output_dir: out.clone(),
            template: None,
            base_class: phinxgen_codegen::DEFAULT_BASE_CLASS.to_string(),
        })
        .unwrap();

        assert_eq!(migration_files(&out).len(), 2);
    }

    #[test]
    fn test_run_rejects_unknown_entities_without_generating() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("migrations");
        std::fs::create_dir(&out).unwrap();

        let err = run(GenerateOptions {
            schema: write_registry(dir.path()),
            entities: vec!["Book".to_string(), "Ghost".to_string()],
            output_dir: out.clone(),
            template: None,
            base_class: phinxgen_codegen::DEFAULT_BASE_CLASS.to_string(),
        })
        .unwrap_err();

        assert!(err.to_string().contains("Ghost"));
        assert!(migration_files(&out).is_empty());
    }
}
