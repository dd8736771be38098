//! Structural schema engine over JSON-ish runtime values.
//!
//! A small algebra of type descriptors ("specs") with five operations:
//! - `reflect`: classify any runtime value into a fixed kind tag.
//! - `check`: validate a value against a spec, accumulating located errors.
//! - `compare`: structural assignability between two specs.
//! - `infer`: reconstruct the most specific spec from a concrete value.
//! - `generate`: synthesize a deterministic sample value from a spec.
//!
//! Plus `schema`, which exports a spec as a JSON Schema (draft-04) document.
//!
//! Design goals:
//! - Specs are immutable trees; cycles are unrepresentable, so every
//!   operation terminates by structural induction.
//! - `check` never raises: failures are data, with a dotted/indexed path.
//! - Everything is deterministic; no randomness anywhere.

pub mod check;
pub mod compare;
pub mod generate;
pub mod infer;
pub mod reflect;
pub mod schema;
pub mod spec;
pub mod value;

pub use check::{CheckError, Report, check};
pub use compare::compare;
pub use generate::generate;
pub use infer::{InferError, infer};
pub use reflect::{Kind, reflect};
pub use schema::schema;
pub use spec::{Literal, Spec, SpecError};
pub use value::Value;
