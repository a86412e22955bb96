//! Metadata-to-table-definition compiler
//!
//! This module contains `TableCompiler`, the core of the generator: a pure
//! transformation from one entity's metadata (plus, transitively, the
//! metadata of many-to-many related entities) into an ordered list of
//! normalized table definitions and a migration class name.
//!
//! ## Relationship handling
//!
//! - **One-to-one / one-to-many**: a declared local field synthesizes an
//!   integer foreign-key column merged ahead of the entity's own fields;
//!   a relationship declaring only a remote field synthesizes nothing.
//! - **Many-to-many**: an intermediary table is synthesized with two
//!   integer columns named `{ownCollection}_{ownKey}` and
//!   `{theirCollection}_{theirKey}`, both forming its compound primary
//!   key. Join tables are emitted before the owning entity's table so a
//!   dependency-order-sensitive runner creates them first.

use phinxgen_core::{FieldType, GeneratorError, GeneratorResult, RelationKind, Validatable};
use phinxgen_meta::{EntityMetadata, FieldDefinition, MetadataProvider};

use crate::table::{Column, CompiledMigration, IdStrategy, TableDefinition};

// ============================================================================
// TableCompiler
// ============================================================================

/// Compiles entity metadata into a [`CompiledMigration`].
///
/// The compiler performs no I/O; it only queries the metadata provider,
/// at most once per many-to-many relationship. All working state is local
/// to each [`compile`](TableCompiler::compile) call.
#[derive(Debug)]
pub struct TableCompiler<'a, P> {
    provider: &'a P,
}

impl<'a, P: MetadataProvider> TableCompiler<'a, P> {
    /// Create a compiler over a metadata provider
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Compile one entity into its migration: join tables first, the
    /// owning entity's table last, plus the generated class name.
    pub fn compile(&self, entity_id: &str) -> GeneratorResult<CompiledMigration> {
        let metadata = self.provider.entity_metadata(entity_id)?;
        metadata.validate()?;

        let mut tables = Vec::new();
        let mut warnings = Vec::new();

        let relationship_fields =
            self.relationship_fields(&metadata, &mut tables, &mut warnings)?;
        let fields = merge_fields(relationship_fields, metadata.fields.clone());

        tables.push(build_table(
            &metadata.collection,
            metadata.primary_key.fields(),
            fields,
            &mut warnings,
        )?);

        Ok(CompiledMigration {
            class_name: class_name_for(entity_id),
            tables,
            warnings,
        })
    }

    /// Process relationships: collect synthesized foreign-key fields for
    /// the owning table and append a table definition per many-to-many
    /// join table.
    fn relationship_fields(
        &self,
        metadata: &EntityMetadata,
        tables: &mut Vec<TableDefinition>,
        warnings: &mut Vec<String>,
    ) -> GeneratorResult<Vec<FieldDefinition>> {
        let mut extra = Vec::new();

        for relationship in &metadata.relationships {
            let kind = relationship.kind.ok_or_else(|| {
                GeneratorError::MissingRelationshipKind {
                    entity: metadata.collection.clone(),
                }
            })?;

            if kind != RelationKind::ManyToMany {
                if let Some(local_field) = &relationship.local_field {
                    extra.push(FieldDefinition::new(local_field.clone(), FieldType::Int));
                }
                continue;
            }

            let related_id = relationship.entity.as_deref().ok_or_else(|| {
                GeneratorError::MissingRelatedEntity {
                    entity: metadata.collection.clone(),
                }
            })?;
            let join_table = relationship.join_table.as_deref().ok_or_else(|| {
                GeneratorError::MissingJoinTable {
                    entity: metadata.collection.clone(),
                }
            })?;

            let their_metadata = self.provider.entity_metadata(related_id)?;

            let our_key = match &relationship.local_field {
                Some(field) => field.clone(),
                None => primary_key_field(metadata)?,
            };
            let their_key = match &relationship.remote_field {
                Some(field) => field.clone(),
                None => primary_key_field(&their_metadata)?,
            };

            let own_column = format!("{}_{}", metadata.collection, our_key);
            let their_column = format!("{}_{}", their_metadata.collection, their_key);

            let join_fields = vec![
                FieldDefinition::new(own_column.clone(), FieldType::Int),
                FieldDefinition::new(their_column.clone(), FieldType::Int),
            ];
            let join_keys = [own_column, their_column];

            tables.push(build_table(join_table, &join_keys, join_fields, warnings)?);
        }

        Ok(extra)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// The first declared primary-key field name of an entity
fn primary_key_field(metadata: &EntityMetadata) -> GeneratorResult<String> {
    metadata
        .primary_key
        .first()
        .map(str::to_string)
        .ok_or_else(|| {
            GeneratorError::metadata_validation(
                &metadata.collection,
                "Entity must declare a primary key",
            )
        })
}

/// Merge synthesized relationship fields ahead of the declared fields.
/// On a name collision the synthesized field wins.
fn merge_fields(
    synthesized: Vec<FieldDefinition>,
    declared: Vec<FieldDefinition>,
) -> Vec<FieldDefinition> {
    let mut merged: Vec<FieldDefinition> = Vec::with_capacity(synthesized.len() + declared.len());
    for field in synthesized.into_iter().chain(declared) {
        if !merged.iter().any(|f| f.name == field.name) {
            merged.push(field);
        }
    }
    merged
}

/// Normalize one table: validate the primary key against the field list,
/// pick the id strategy, and render the explicit column list.
fn build_table(
    collection: &str,
    primary_key: &[String],
    fields: Vec<FieldDefinition>,
    warnings: &mut Vec<String>,
) -> GeneratorResult<TableDefinition> {
    let Some(first_key) = primary_key.first() else {
        return Err(GeneratorError::metadata_validation(
            collection,
            "Entity must declare a primary key",
        ));
    };

    for key in primary_key {
        let field = fields.iter().find(|f| &f.name == key).ok_or_else(|| {
            GeneratorError::PrimaryKeyNotFound {
                key: key.clone(),
                collection: collection.to_string(),
            }
        })?;
        if field.field_type.is_none() {
            return Err(GeneratorError::PrimaryKeyTypeMissing {
                key: key.clone(),
                collection: collection.to_string(),
            });
        }
    }

    let first_field = fields
        .iter()
        .find(|f| &f.name == first_key)
        .cloned()
        .ok_or_else(|| GeneratorError::PrimaryKeyNotFound {
            key: first_key.clone(),
            collection: collection.to_string(),
        })?;

    // An identity column is created implicitly by the framework, so the
    // backing field is dropped from the explicit column list.
    let mut identity_column = None;
    let id_strategy = if primary_key.len() > 1 || !first_field.is_integer() {
        IdStrategy::DeclaredKeys(primary_key.to_vec())
    } else if !first_field.auto_increments() {
        IdStrategy::Disabled
    } else {
        identity_column = Some(first_key.clone());
        IdStrategy::Identity(first_key.clone())
    };

    let mut columns = Vec::with_capacity(fields.len());
    for field in fields {
        if identity_column.as_deref() == Some(field.name.as_str()) {
            continue;
        }
        match field.field_type {
            Some(field_type) => columns.push(Column::for_field(field.name, field_type)),
            None => {
                tracing::warn!(
                    collection,
                    field = %field.name,
                    "skipping field with no type metadata"
                );
                warnings.push(format!(
                    "Field '{}' on table '{}' has no type metadata and was skipped",
                    field.name, collection
                ));
            }
        }
    }

    Ok(TableDefinition {
        collection: collection.to_string(),
        id_strategy,
        columns,
    })
}

/// Migration class name for an entity identifier: the identifier's simple
/// name (tail after any `\`, `::` or `.` qualification) plus `Migration`.
pub fn class_name_for(entity_id: &str) -> String {
    let simple = entity_id
        .rsplit(['\\', ':', '.'])
        .next()
        .unwrap_or(entity_id);
    format!("{simple}Migration")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use phinxgen_core::ColumnType;
    use phinxgen_meta::{MetadataRegistry, PrimaryKey, Relationship};

    fn registry_with(id: &str, metadata: EntityMetadata) -> MetadataRegistry {
        MetadataRegistry::new().with_entity(id, metadata)
    }

    fn compile(registry: &MetadataRegistry, id: &str) -> GeneratorResult<CompiledMigration> {
        TableCompiler::new(registry).compile(id)
    }

    #[test]
    fn test_identity_key_removed_from_columns() {
        let registry = registry_with(
            "Test",
            EntityMetadata::new("test", PrimaryKey::single("id"))
                .with_field("id", FieldType::Int)
                .with_field("first_field", FieldType::String),
        );

        let migration = compile(&registry, "Test").unwrap();
        assert_eq!(migration.tables.len(), 1);

        let table = &migration.tables[0];
        assert_eq!(table.id_strategy, IdStrategy::Identity("id".to_string()));
        assert_eq!(table.columns.len(), 1);
        assert_eq!(table.columns[0].name, "first_field");
    }

    #[test]
    fn test_field_type_mapping_through_compiler() {
        let registry = registry_with(
            "Test",
            EntityMetadata::new("test", PrimaryKey::single("id"))
                .with_field("id", FieldType::Int)
                .with_field("first_field", FieldType::Int)
                .with_field("second_field", FieldType::Float)
                .with_field("third_field", FieldType::Bool)
                .with_field("fourth_field", FieldType::DateTime)
                .with_field("fifth_field", FieldType::Array)
                .with_field("sixth_field", FieldType::String),
        );

        let migration = compile(&registry, "Test").unwrap();
        let columns = &migration.tables[0].columns;

        let expect = |name: &str, column_type: ColumnType| {
            let column = columns.iter().find(|c| c.name == name).unwrap();
            assert_eq!(column.column_type, column_type);
        };
        expect("first_field", ColumnType::Integer);
        expect("second_field", ColumnType::Float);
        expect("third_field", ColumnType::Boolean);
        expect("fourth_field", ColumnType::DateTime);
        expect("fifth_field", ColumnType::Text);
        expect("sixth_field", ColumnType::String);
    }

    #[test]
    fn test_alternate_integer_primary_key() {
        let registry = registry_with(
            "Test",
            EntityMetadata::new("test", PrimaryKey::single("first_field"))
                .with_field("first_field", FieldType::Int),
        );

        let migration = compile(&registry, "Test").unwrap();
        let table = &migration.tables[0];
        assert_eq!(
            table.id_strategy,
            IdStrategy::Identity("first_field".to_string())
        );
        assert!(table.columns.is_empty());
    }

    #[test]
    fn test_non_incrementing_integer_primary_key() {
        let registry = registry_with(
            "Test",
            EntityMetadata::new("test", PrimaryKey::single("id")).with_field_definition(
                FieldDefinition::new("id", FieldType::Int).with_auto_increment(false),
            ),
        );

        let migration = compile(&registry, "Test").unwrap();
        let table = &migration.tables[0];
        assert_eq!(table.id_strategy, IdStrategy::Disabled);
        // The key stays in the explicit column list
        assert_eq!(table.columns.len(), 1);
        assert_eq!(table.columns[0].name, "id");
    }

    #[test]
    fn test_string_primary_key_declared_explicitly() {
        let registry = registry_with(
            "Test",
            EntityMetadata::new("test", PrimaryKey::single("code")).with_field_definition(
                FieldDefinition::new("code", FieldType::String).with_auto_increment(false),
            ),
        );

        let migration = compile(&registry, "Test").unwrap();
        let table = &migration.tables[0];
        assert_eq!(
            table.id_strategy,
            IdStrategy::DeclaredKeys(vec!["code".to_string()])
        );
        assert_eq!(table.columns[0].name, "code");
        assert_eq!(table.columns[0].options.limit, Some(255));
    }

    #[test]
    fn test_compound_primary_key() {
        let registry = registry_with(
            "Test",
            EntityMetadata::new("test", PrimaryKey::compound(["a", "b"]))
                .with_field("a", FieldType::Int)
                .with_field("b", FieldType::Int),
        );

        let migration = compile(&registry, "Test").unwrap();
        let table = &migration.tables[0];
        assert_eq!(
            table.id_strategy,
            IdStrategy::DeclaredKeys(vec!["a".to_string(), "b".to_string()])
        );
        // Compound keys never become identity columns
        assert_eq!(table.columns.len(), 2);
    }

    #[test]
    fn test_missing_primary_key_field() {
        let registry = registry_with(
            "Test",
            EntityMetadata::new("test", PrimaryKey::single("id"))
                .with_field("name", FieldType::String),
        );

        let err = compile(&registry, "Test").unwrap_err();
        assert!(matches!(
            &err,
            GeneratorError::PrimaryKeyNotFound { key, .. } if key == "id"
        ));
        assert!(err.to_string().contains("primary key 'id'"));
    }

    #[test]
    fn test_primary_key_without_type() {
        let registry = registry_with(
            "Test",
            EntityMetadata::new("test", PrimaryKey::single("id"))
                .with_field_definition(FieldDefinition::untyped("id")),
        );

        let err = compile(&registry, "Test").unwrap_err();
        assert!(matches!(err, GeneratorError::PrimaryKeyTypeMissing { .. }));
    }

    #[test]
    fn test_relationship_missing_kind() {
        let registry = registry_with(
            "Test",
            EntityMetadata::new("test", PrimaryKey::single("id"))
                .with_field("id", FieldType::Int)
                .with_relationship(Relationship {
                    local_field: Some("one_id".to_string()),
                    ..Relationship::default()
                }),
        );

        let err = compile(&registry, "Test").unwrap_err();
        assert!(matches!(err, GeneratorError::MissingRelationshipKind { .. }));
    }

    #[test]
    fn test_local_field_synthesizes_integer_column() {
        let registry = registry_with(
            "Test",
            EntityMetadata::new("test", PrimaryKey::single("id"))
                .with_field("id", FieldType::Int)
                .with_relationship(Relationship::one_to_one().with_local_field("one_id")),
        );

        let migration = compile(&registry, "Test").unwrap();
        let table = &migration.tables[0];
        assert_eq!(table.columns.len(), 1);
        assert_eq!(table.columns[0].name, "one_id");
        assert_eq!(table.columns[0].column_type, ColumnType::Integer);
    }

    #[test]
    fn test_remote_field_only_synthesizes_nothing() {
        let registry = registry_with(
            "Test",
            EntityMetadata::new("test", PrimaryKey::single("id"))
                .with_field("id", FieldType::Int)
                .with_relationship(Relationship::one_to_one().with_remote_field("test_id")),
        );

        let migration = compile(&registry, "Test").unwrap();
        assert!(migration.tables[0].columns.is_empty());
    }

    #[test]
    fn test_synthesized_field_wins_on_collision() {
        let registry = registry_with(
            "Test",
            EntityMetadata::new("test", PrimaryKey::single("id"))
                .with_field("id", FieldType::Int)
                .with_field("one_id", FieldType::String)
                .with_relationship(Relationship::one_to_many().with_local_field("one_id")),
        );

        let migration = compile(&registry, "Test").unwrap();
        let table = &migration.tables[0];
        // The synthesized foreign key shadows the declared string field
        // and is ordered ahead of the entity's own fields.
        assert_eq!(table.columns.len(), 1);
        assert_eq!(table.columns[0].name, "one_id");
        assert_eq!(table.columns[0].column_type, ColumnType::Integer);
    }

    #[test]
    fn test_many_to_many_synthesizes_join_table_first() {
        let registry = MetadataRegistry::new()
            .with_entity(
                "Book",
                EntityMetadata::new("book", PrimaryKey::single("id"))
                    .with_field("id", FieldType::Int)
                    .with_field("title", FieldType::String)
                    .with_relationship(Relationship::many_to_many("Author", "book_author")),
            )
            .with_entity(
                "Author",
                EntityMetadata::new("author", PrimaryKey::single("id"))
                    .with_field("id", FieldType::Int),
            );

        let migration = compile(&registry, "Book").unwrap();
        assert_eq!(migration.tables.len(), 2);

        let join = &migration.tables[0];
        assert_eq!(join.collection, "book_author");
        assert_eq!(
            join.id_strategy,
            IdStrategy::DeclaredKeys(vec!["book_id".to_string(), "author_id".to_string()])
        );
        assert_eq!(join.columns.len(), 2);
        assert!(join.columns.iter().all(|c| c.column_type == ColumnType::Integer));

        let owner = &migration.tables[1];
        assert_eq!(owner.collection, "book");
    }

    #[test]
    fn test_many_to_many_with_explicit_key_fields() {
        let registry = MetadataRegistry::new()
            .with_entity(
                "Book",
                EntityMetadata::new("book", PrimaryKey::single("id"))
                    .with_field("id", FieldType::Int)
                    .with_relationship(
                        Relationship::many_to_many("Author", "book_author")
                            .with_local_field("isbn")
                            .with_remote_field("code"),
                    ),
            )
            .with_entity(
                "Author",
                EntityMetadata::new("author", PrimaryKey::single("id"))
                    .with_field("id", FieldType::Int),
            );

        let migration = compile(&registry, "Book").unwrap();
        let join = &migration.tables[0];
        assert_eq!(join.columns[0].name, "book_isbn");
        assert_eq!(join.columns[1].name, "author_code");
    }

    #[test]
    fn test_many_to_many_missing_related_entity() {
        let registry = registry_with(
            "Book",
            EntityMetadata::new("book", PrimaryKey::single("id"))
                .with_field("id", FieldType::Int)
                .with_relationship(Relationship {
                    kind: Some(RelationKind::ManyToMany),
                    join_table: Some("book_author".to_string()),
                    ..Relationship::default()
                }),
        );

        let err = compile(&registry, "Book").unwrap_err();
        assert!(matches!(err, GeneratorError::MissingRelatedEntity { .. }));
    }

    #[test]
    fn test_many_to_many_missing_join_table() {
        let registry = MetadataRegistry::new()
            .with_entity(
                "Book",
                EntityMetadata::new("book", PrimaryKey::single("id"))
                    .with_field("id", FieldType::Int)
                    .with_relationship(Relationship {
                        kind: Some(RelationKind::ManyToMany),
                        entity: Some("Author".to_string()),
                        ..Relationship::default()
                    }),
            )
            .with_entity(
                "Author",
                EntityMetadata::new("author", PrimaryKey::single("id"))
                    .with_field("id", FieldType::Int),
            );

        let err = compile(&registry, "Book").unwrap_err();
        assert!(matches!(err, GeneratorError::MissingJoinTable { .. }));
    }

    #[test]
    fn test_typeless_field_skipped_with_warning() {
        let registry = registry_with(
            "Test",
            EntityMetadata::new("test", PrimaryKey::single("id"))
                .with_field("id", FieldType::Int)
                .with_field_definition(FieldDefinition::untyped("mystery"))
                .with_field("name", FieldType::String),
        );

        let migration = compile(&registry, "Test").unwrap();
        let table = &migration.tables[0];
        assert!(table.columns.iter().all(|c| c.name != "mystery"));
        assert_eq!(migration.warnings.len(), 1);
        assert!(migration.warnings[0].contains("mystery"));
    }

    #[test]
    fn test_unknown_entity() {
        let registry = MetadataRegistry::new();
        let err = compile(&registry, "Ghost").unwrap_err();
        assert!(matches!(err, GeneratorError::EntityNotFound(_)));
    }

    #[test]
    fn test_class_name_for() {
        assert_eq!(class_name_for("Book"), "BookMigration");
        assert_eq!(class_name_for("Test\\Entity"), "EntityMigration");
        assert_eq!(class_name_for("shop::Order"), "OrderMigration");
        assert_eq!(class_name_for("catalog.Item"), "ItemMigration");
    }
}
