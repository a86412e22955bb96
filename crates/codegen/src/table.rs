//! Compiled table definitions
//!
//! This module contains the normalized structures the compiler produces
//! from entity metadata, and the rendering of each into a guarded Phinx
//! table-builder block.

use phinxgen_core::{ColumnType, FieldType};

// ============================================================================
// ColumnOptions
// ============================================================================

/// Extra options attached to a rendered column.
///
/// Only two options are ever defaulted: string columns get a length limit
/// of 255 and integer columns are unsigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnOptions {
    /// Length limit (string columns)
    pub limit: Option<u32>,

    /// Signedness (integer columns)
    pub signed: Option<bool>,
}

impl ColumnOptions {
    /// The default options for a column of the given type
    pub fn defaults_for(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::String => Self {
                limit: Some(255),
                ..Self::default()
            },
            ColumnType::Integer => Self {
                signed: Some(false),
                ..Self::default()
            },
            _ => Self::default(),
        }
    }

    /// Check if no options are set
    pub fn is_empty(&self) -> bool {
        self.limit.is_none() && self.signed.is_none()
    }

    /// The `, ['limit' => 255]` style fragment appended to an
    /// `addColumn` call, or an empty string when no options are set.
    pub fn fragment(&self) -> String {
        let mut parts = Vec::new();
        if let Some(limit) = self.limit {
            parts.push(format!("'limit' => {limit}"));
        }
        if let Some(signed) = self.signed {
            parts.push(format!("'signed' => {signed}"));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!(", [{}]", parts.join(", "))
        }
    }
}

// ============================================================================
// Column
// ============================================================================

/// A single column of a compiled table definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name
    pub name: String,

    /// Target column type
    pub column_type: ColumnType,

    /// Rendering options
    pub options: ColumnOptions,
}

impl Column {
    /// Build a column for a typed metadata field, applying the fixed type
    /// map and the default options.
    pub fn for_field(name: impl Into<String>, field_type: FieldType) -> Self {
        let column_type = field_type.column_type();
        Self {
            name: name.into(),
            column_type,
            options: ColumnOptions::defaults_for(column_type),
        }
    }

    /// The `$table->addColumn(...)` call for this column
    pub fn php(&self) -> String {
        format!(
            "$table->addColumn('{}', '{}'{});",
            self.name,
            self.column_type.as_str(),
            self.options.fragment()
        )
    }
}

// ============================================================================
// IdStrategy
// ============================================================================

/// How a table's primary key is expressed in the table options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdStrategy {
    /// Framework identity column; the named field is created implicitly
    /// and removed from the explicit column list.
    Identity(String),

    /// No identity column; the key field stays in the column list without
    /// being redeclared as a primary-key constraint.
    Disabled,

    /// No identity column plus an explicit primary-key column list
    /// (compound or non-integer keys).
    DeclaredKeys(Vec<String>),
}

impl IdStrategy {
    /// The table-options fragment appended to `$this->table(...)`
    pub fn options_fragment(&self) -> String {
        match self {
            IdStrategy::Identity(name) => format!(", ['id' => '{name}']"),
            IdStrategy::Disabled => ", ['id' => false]".to_string(),
            IdStrategy::DeclaredKeys(keys) => {
                format!(", ['id' => false, 'primary_key' => ['{}']]", keys.join("', '"))
            }
        }
    }
}

// ============================================================================
// TableDefinition
// ============================================================================

/// One normalized table produced from entity metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDefinition {
    /// Table name
    pub collection: String,

    /// Primary key handling
    pub id_strategy: IdStrategy,

    /// Explicit columns, in declaration order
    pub columns: Vec<Column>,
}

impl TableDefinition {
    /// Render the guarded creation block for this table.
    ///
    /// Indentation matches the insertion point inside the template's
    /// `change()` method body.
    pub fn php_block(&self) -> String {
        let mut out = String::with_capacity(128 + self.columns.len() * 64);
        out.push_str(&format!("if (!$this->hasTable('{}')) {{\n", self.collection));
        out.push_str(&format!(
            "            $table = $this->table('{}'{});\n",
            self.collection,
            self.id_strategy.options_fragment()
        ));
        for column in &self.columns {
            out.push_str("            ");
            out.push_str(&column.php());
            out.push('\n');
        }
        out.push_str("            $table->create();\n");
        out.push_str("        }");
        out
    }
}

// ============================================================================
// CompiledMigration
// ============================================================================

/// The complete result of compiling one entity: its table definitions
/// (join tables first, the owning entity's table last) and the generated
/// migration class name. The file path is assigned by the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledMigration {
    /// Generated migration class name
    pub class_name: String,

    /// Table definitions in emission order
    pub tables: Vec<TableDefinition>,

    /// Warnings collected during compilation (e.g. skipped fields)
    pub warnings: Vec<String>,
}

impl CompiledMigration {
    /// All table blocks joined for template substitution
    pub fn table_definitions_php(&self) -> String {
        self.tables
            .iter()
            .map(TableDefinition::php_block)
            .collect::<Vec<_>>()
            .join("\n\n        ")
    }
}

// ============================================================================
// Tests
// ============================================================================
