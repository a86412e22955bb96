//! # Phinxgen Core
//!
//! Core types, traits, and error handling for phinxgen.
//!
//! This crate provides the foundational building blocks used throughout
//! the phinxgen workspace, including:
//!
//! - **Types**: Field types, target column types, relationship kinds
//! - **Traits**: Common behaviors like `Validatable` and `Persistable`
//! - **Errors**: Unified error handling with `GeneratorError` and
//!   `GeneratorResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{GeneratorError, GeneratorResult};
pub use traits::{Persistable, Validatable};
pub use types::{ColumnType, FieldType, RelationKind};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
