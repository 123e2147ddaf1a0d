//! Individual value generators.
//!
//! `numeric` and `string` are the two engines; the remaining modules are the
//! primitives they draw from.

pub mod format;
pub mod network;
pub mod numeric;
pub mod pattern;
pub mod primitives;
pub mod string;
pub mod timestamp;
pub mod uuid;

pub use numeric::{generate_integer, generate_number, generate_numeric};
pub use pattern::CompiledPattern;
pub use primitives::{named_primitive, named_primitive_names, NamedPrimitive};
pub use string::generate_string;
