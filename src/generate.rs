//! Example synthesis: one deterministic representative value per spec.
//!
//! The output is meant to be fed straight back into `check` (a generated
//! value always satisfies its own spec), so every policy here is fixed:
//! numbers are 0, strings are "string", booleans are true, arrays get three
//! elements, unions take their first arm. No randomness.

use crate::spec::{Literal, Spec};
use crate::value::Value;

/// How many elements a generated array gets. Just enough to look like one.
const ARRAY_SAMPLE_LEN: usize = 3;

/// Synthesize a representative value for `spec`.
pub fn generate(spec: &Spec) -> Value {
    match spec {
        Spec::Any => Value::Object(indexmap::IndexMap::new()),
        Spec::Undefined => Value::Undefined,
        Spec::Null => Value::Null,
        Spec::String => Value::String("string".to_string()),
        Spec::Number => Value::Number(0.0),
        Spec::Boolean => Value::Bool(true),

        Spec::Literal(Literal::Str(s)) => Value::String(s.clone()),
        Spec::Literal(Literal::Num(n)) => Value::Number(n.0),

        Spec::Object(props) => Value::Object(
            props
                .iter()
                .map(|(key, nested)| (key.clone(), generate(nested)))
                .collect(),
        ),

        Spec::Array(elem) => {
            Value::Array((0..ARRAY_SAMPLE_LEN).map(|_| generate(elem)).collect())
        }

        Spec::Tuple(types) => Value::Array(types.iter().map(generate).collect()),

        Spec::Union(arms) => match arms.first() {
            Some(first) => generate(first),
            // unreachable for specs built through the constructors
            None => Value::Undefined,
        },
    }
}

// ------------------------------- Tests ------------------------------------ //
