//! Core types for the schemagen example generator.
//!
//! This crate provides the request-scoped value objects and the static format
//! registry shared by the generation engines:
//!
//! - [`NumericConstraints`] / [`StringConstraints`] - Constraint tuples mirroring
//!   JSON Schema / OpenAPI validation keywords
//! - [`Format`] / [`FormatSpec`] - The string format registry
//! - [`StringValue`] / [`GeneratedValue`] - Generated values
//! - [`ScalarSchema`] / [`GeneratorSettings`] - Configuration loaded from JSON or YAML
//! - [`GenerationError`] - Typed generation failures
//!
//! # Architecture
//!
//! ```text
//! schemagen-core (this crate)
//!    │
//!    └─── schemagen-generator  (numeric + string engines, primitives, patterns)
//!              │
//!              └─── schemagen  (CLI)
//! ```
//!
//! # Example
//!
//! ```rust
//! use schemagen_core::{Format, LengthType, ScalarSchema};
//!
//! let schema = ScalarSchema::from_yaml(r#"
//! type: integer
//! minimum: 10
//! maximum: 12
//! exclusiveMinimum: true
//! "#).unwrap();
//! assert!(matches!(schema, ScalarSchema::Integer(_)));
//!
//! let uuid = Format::from_name("uuid").unwrap();
//! assert_eq!(uuid.spec().length_type, LengthType::Fixed);
//! ```

pub mod constraints;
pub mod decimal;
pub mod error;
pub mod formats;
pub mod schema;
pub mod settings;
pub mod values;

// Re-exports for convenience
pub use constraints::{
    DecimalConstraints, NumberMode, NumericConstraints, StringConstraints, DEFAULT_MAX_ATTEMPTS,
};
pub use decimal::ExactDecimal;
pub use error::{GenerationError, Result};
pub use formats::{AllowedLengths, Format, FormatSpec, LengthType, ReturnKind};
pub use schema::{ExclusiveBound, NumericSchema, ScalarSchema, SchemaError, StringSchema};
pub use settings::GeneratorSettings;
pub use values::{GeneratedValue, StringValue};
