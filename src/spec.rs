//! The spec model: a closed, finite tagged union describing a schema.
//!
//! Specs are immutable value objects. The fallible constructors (`literal`,
//! `tuple`, `union`) enforce their invariants at construction time so the
//! rest of the engine can assume well-formed trees: literals are scalar,
//! tuples and unions are non-empty. Ownership (`Box`/`Vec`) makes cycles
//! unrepresentable, which is what lets every operation recurse freely.

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use thiserror::Error;

use crate::reflect::{Kind, reflect};
use crate::value::Value;

/// Payload of a `Spec::Literal`. `OrderedFloat` so literals are `Eq`-able
/// and usable for dedup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Literal {
    Str(String),
    Num(OrderedFloat<f64>),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Str(s) => f.write_str(s),
            Literal::Num(n) => write!(f, "{}", n.0),
        }
    }
}

/// A schema descriptor. One variant per kind, each carrying only its own
/// payload; all traversals in the engine match exhaustively over this enum.
#[derive(Clone, Debug, PartialEq)]
pub enum Spec {
    /// Matches anything.
    Any,
    Undefined,
    Null,
    String,
    Number,
    Boolean,
    /// Matches exactly one scalar.
    Literal(Literal),
    /// Property order is kept for deterministic output; matching ignores it.
    /// A property is required iff its spec is not `Undefined`.
    Object(IndexMap<String, Spec>),
    Array(Box<Spec>),
    /// Fixed arity, non-empty.
    Tuple(Vec<Spec>),
    /// "One of", non-empty; arm order is meaningful (generate takes the first).
    Union(Vec<Spec>),
}

/// Construction-time faults. These signal misuse of the builder API and are
/// distinct from validation failures, which `check` reports as data.
#[derive(Debug, Error, PartialEq)]
pub enum SpecError {
    #[error("literal specs accept only string or number values, got {0}")]
    NonScalarLiteral(Kind),
    #[error("tuple specs need at least one element type")]
    EmptyTuple,
    #[error("union specs need at least one arm")]
    EmptyUnion,
}

impl Spec {
    /// Literal matcher. Only string and number scalars are representable.
    pub fn literal(value: Value) -> Result<Spec, SpecError> {
        match value {
            Value::String(s) => Ok(Spec::Literal(Literal::Str(s))),
            Value::Number(n) => Ok(Spec::Literal(Literal::Num(OrderedFloat(n)))),
            other => Err(SpecError::NonScalarLiteral(reflect(&other))),
        }
    }

    pub fn str_literal(s: impl Into<String>) -> Spec {
        Spec::Literal(Literal::Str(s.into()))
    }

    pub fn num_literal(n: f64) -> Spec {
        Spec::Literal(Literal::Num(OrderedFloat(n)))
    }

    /// Record matcher; declared property order is preserved.
    pub fn object<K, I>(props: I) -> Spec
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Spec)>,
    {
        Spec::Object(props.into_iter().map(|(k, s)| (k.into(), s)).collect())
    }

    /// Homogeneous array matcher; element spec defaults to `Any`.
    pub fn array(elem: Option<Spec>) -> Spec {
        Spec::Array(Box::new(elem.unwrap_or(Spec::Any)))
    }

    /// Fixed-arity sequence matcher. Empty arity is a construction fault.
    pub fn tuple(types: Vec<Spec>) -> Result<Spec, SpecError> {
        if types.is_empty() {
            return Err(SpecError::EmptyTuple);
        }
        Ok(Spec::Tuple(types))
    }

    /// "One of" matcher. An empty union matches nothing, so it is refused.
    pub fn union(arms: Vec<Spec>) -> Result<Spec, SpecError> {
        if arms.is_empty() {
            return Err(SpecError::EmptyUnion);
        }
        Ok(Spec::Union(arms))
    }

    /// Human-readable "expected" label used in check errors. Kind name for
    /// structural specs, the raw value for literals, `" | "`-joined labels
    /// for unions.
    pub fn expected(&self) -> String {
        match self {
            Spec::Any => "any".to_string(),
            Spec::Undefined => Kind::Undefined.name().to_string(),
            Spec::Null => Kind::Null.name().to_string(),
            Spec::String => Kind::String.name().to_string(),
            Spec::Number => Kind::Number.name().to_string(),
            Spec::Boolean => Kind::Boolean.name().to_string(),
            Spec::Literal(lit) => lit.to_string(),
            Spec::Object(_) => Kind::Object.name().to_string(),
            Spec::Array(_) | Spec::Tuple(_) => Kind::Array.name().to_string(),
            Spec::Union(arms) => arms
                .iter()
                .map(Spec::expected)
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }
}

// ------------------------------- Tests ------------------------------------ //
