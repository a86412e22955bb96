//! Migration source rendering
//!
//! This module substitutes a compiled migration into the migration class
//! template. Four tokens are recognized: `{{baseFQCN}}` (fully-qualified
//! base class), `{{baseClass}}` (its simple name), `{{className}}` (the
//! generated class), and `{{tableDefinition}}` (the concatenated table
//! blocks).

use phinxgen_core::{GeneratorError, GeneratorResult};
use std::path::Path;

use crate::table::CompiledMigration;

/// The bundled migration class template
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/migration.php.tpl");

/// The default base migration class of the target runner
pub const DEFAULT_BASE_CLASS: &str = "Phinx\\Migration\\AbstractMigration";

// ============================================================================
// SourceRenderer
// ============================================================================

/// Renders compiled migrations into source text.
#[derive(Debug, Clone)]
pub struct SourceRenderer {
    template: String,
    base_class: String,
}

impl SourceRenderer {
    /// Create a renderer over the bundled template.
    ///
    /// The base class must be a syntactically valid fully-qualified class
    /// name.
    pub fn new(base_class: impl Into<String>) -> GeneratorResult<Self> {
        let base_class = base_class.into();
        if !is_valid_fqcn(&base_class) {
            return Err(GeneratorError::InvalidBaseClass(base_class));
        }
        Ok(Self {
            template: DEFAULT_TEMPLATE.to_string(),
            base_class,
        })
    }

    /// Replace the bundled template with one loaded from a file
    pub fn with_template_file(mut self, path: impl AsRef<Path>) -> GeneratorResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(GeneratorError::TemplateNotFound(path.to_path_buf()));
        }
        self.template =
            std::fs::read_to_string(path).map_err(|e| GeneratorError::TemplateUnreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(self)
    }

    /// The configured base class
    pub fn base_class(&self) -> &str {
        &self.base_class
    }

    /// Substitute the migration into the template
    pub fn render(&self, migration: &CompiledMigration) -> String {
        self.template
            .replace("{{baseFQCN}}", &self.base_class)
            .replace("{{baseClass}}", simple_class_name(&self.base_class))
            .replace("{{className}}", &migration.class_name)
            .replace("{{tableDefinition}}", &migration.table_definitions_php())
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// The simple (unqualified) name of a fully-qualified class name
fn simple_class_name(fqcn: &str) -> &str {
    fqcn.rsplit('\\').next().unwrap_or(fqcn)
}

/// Check that every `\`-separated segment is a valid identifier
fn is_valid_fqcn(fqcn: &str) -> bool {
    !fqcn.is_empty() && fqcn.split('\\').all(is_valid_identifier)
}

fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

// ============================================================================
// Tests
// ============================================================================
