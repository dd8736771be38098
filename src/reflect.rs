//! Kind classification: every runtime value maps to exactly one tag.

use crate::value::Value;

/// The fixed vocabulary of runtime value categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Null,
    Callable,
    String,
    Number,
    Boolean,
    Array,
    Date,
    Object,
}

impl Kind {
    /// Lowercase name as used in error messages and schema output.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Callable => "callable",
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Array => "array",
            Kind::Date => "date",
            Kind::Object => "object",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a value. Total, no side effects. Precedence only matters for
/// hosts where a value can satisfy several predicates at once; here each
/// variant carries exactly one kind, so the match is the whole story.
pub fn reflect(value: &Value) -> Kind {
    match value {
        Value::Undefined => Kind::Undefined,
        Value::Null => Kind::Null,
        Value::Callable(_) => Kind::Callable,
        Value::String(_) => Kind::String,
        Value::Number(_) => Kind::Number,
        Value::Bool(_) => Kind::Boolean,
        Value::Array(_) => Kind::Array,
        Value::Date(_) => Kind::Date,
        Value::Object(_) => Kind::Object,
    }
}

// ------------------------------- Tests ------------------------------------ //
