//! Constrained random value generator for JSON Schema / OpenAPI scalars.
//!
//! This crate provides the [`SchemaFaker`], which produces random `integer`,
//! `number` and `string` values satisfying schema validation keywords
//! (`minimum`, `exclusiveMaximum`, `multipleOf`, `minLength`, `pattern`,
//! `format`, ...). The generator is driven by a seedable RNG so runs with the
//! same seed are reproducible.
//!
//! # Architecture
//!
//! ```text
//! ScalarSchema (JSON / YAML)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │     SchemaFaker      │
//! │                      │
//! │  - rng (StdRng)      │
//! │  - settings          │
//! └──────────┬───────────┘
//!            │
//!     ┌──────┴───────┐
//!     ▼              ▼
//!  numeric         string ──► pattern / format registry / named primitives / free text
//! (ModeOps)
//!            │
//!            ▼
//!     GeneratedValue
//! ```
//!
//! # Example
//!
//! ```rust
//! use schemagen_core::{NumericConstraints, StringConstraints};
//! use schemagen_generator::SchemaFaker;
//!
//! let mut faker = SchemaFaker::seeded(42);
//!
//! let value = faker
//!     .generate_integer(
//!         &NumericConstraints::between(10, 12)
//!             .with_exclusive_minimum(true)
//!             .with_exclusive_maximum(true),
//!     )
//!     .unwrap();
//! assert_eq!(value, 11);
//!
//! let phone = faker
//!     .generate_string(&StringConstraints::new().with_pattern(r"^[0-9]{3}-[0-9]{4}$"))
//!     .unwrap();
//! assert_eq!(phone.len(), 8);
//! ```
//!
//! # Failures
//!
//! Every call either returns a value satisfying all of its constraints or a
//! [`GenerationError`](schemagen_core::GenerationError):
//!
//! - `InvalidArgument` - contradictory input (`maxLength < minLength`,
//!   `multipleOf: 0`, a malformed pattern)
//! - `Unsatisfiable` - provably no value exists
//! - `NoExampleFound` - a bounded search ran out of attempts
//! - `Unsupported` - a valid number the exact decimal domain cannot hold
//!   (e.g. `minimum: 1e30`)

pub mod generator;
pub mod generators;
pub mod search;

// Re-exports for convenience
pub use generator::{ExampleIterator, SchemaFaker};
pub use generators::CompiledPattern;
