//! Metadata provider capability
//!
//! The generator never owns entity metadata; it asks a `MetadataProvider`
//! for it. Any implementation of this trait is substitutable: the
//! file-backed [`MetadataRegistry`](crate::registry::MetadataRegistry) is
//! the production implementation, and an in-memory registry serves as the
//! test double.

use crate::entity::EntityMetadata;
use phinxgen_core::GeneratorResult;

/// Capability for looking up entity metadata by identifier.
pub trait MetadataProvider {
    /// Resolve the metadata for an entity identifier.
    fn entity_metadata(&self, entity: &str) -> GeneratorResult<EntityMetadata>;

    /// Resolve the metadata of the entity backing an intermediary
    /// (join) table, looked up by its collection name.
    fn intermediary_metadata(&self, join_table: &str) -> GeneratorResult<EntityMetadata>;
}
