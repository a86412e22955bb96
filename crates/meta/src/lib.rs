//! # Phinxgen Metadata
//!
//! This crate provides the declarative entity metadata model consumed by
//! the migration generator.
//!
//! ## Core Concepts
//!
//! - **EntityMetadata**: a record type with a collection (table) name, a
//!   primary key, fields, and relationships
//! - **FieldDefinition**: a named, typed field that maps to a column
//! - **Relationship**: a connection to another entity (one-to-one,
//!   one-to-many, or many-to-many via a join table)
//! - **MetadataProvider**: the capability through which the generator
//!   looks up metadata
//! - **MetadataRegistry**: a JSON-backed provider implementation
//!

pub mod entity;
pub mod field;
pub mod provider;
pub mod registry;
pub mod relationship;

// Re-export commonly used types at crate root
pub use entity::{EntityMetadata, PrimaryKey};
pub use field::FieldDefinition;
pub use provider::MetadataProvider;
pub use registry::MetadataRegistry;
pub use relationship::Relationship;

// Re-export core types that are commonly used with metadata
pub use phinxgen_core::{FieldType, GeneratorError, GeneratorResult, RelationKind};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
