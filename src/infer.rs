//! Reverse inference: reconstruct the most specific spec from a value.
//!
//! Scalars map straight to their kind matchers. Arrays sample a bounded
//! prefix of their elements, dedup the inferred element shapes via
//! `compare`, and union whatever distinct shapes remain (first-seen arm
//! order). Objects recurse per property. Callables and dates have no spec
//! counterpart and are refused outright.

use thiserror::Error;

use crate::compare::compare;
use crate::reflect::{Kind, reflect};
use crate::spec::Spec;
use crate::value::Value;

/// Element sampling cap for array inference. Elements past this index do not
/// contribute to the element type; keeps inference cheap on large arrays.
const ARRAY_SAMPLE_CAP: usize = 65;

/// Inference refuses value kinds that have no spec counterpart. Hard
/// limitation, not a recoverable condition.
#[derive(Debug, Error, PartialEq)]
pub enum InferError {
    #[error("cannot infer a spec from a {0} value")]
    Unsupported(Kind),
}

/// Map a concrete value to the most specific spec describing it.
pub fn infer(value: &Value) -> Result<Spec, InferError> {
    match value {
        Value::Undefined => Ok(Spec::Undefined),
        Value::Null => Ok(Spec::Null),
        Value::Bool(_) => Ok(Spec::Boolean),
        Value::Number(_) => Ok(Spec::Number),
        Value::String(_) => Ok(Spec::String),

        Value::Array(items) => {
            if items.is_empty() {
                return Ok(Spec::array(None));
            }
            let mut shapes: Vec<Spec> = Vec::new();
            for item in items.iter().take(ARRAY_SAMPLE_CAP) {
                let shape = infer(item)?;
                if !shapes.iter().any(|seen| compare(seen, &shape)) {
                    shapes.push(shape);
                }
            }
            let elem = if shapes.len() == 1 {
                shapes.remove(0)
            } else {
                Spec::Union(shapes)
            };
            Ok(Spec::Array(Box::new(elem)))
        }

        Value::Object(map) => {
            let mut props = indexmap::IndexMap::with_capacity(map.len());
            for (key, nested) in map {
                props.insert(key.clone(), infer(nested)?);
            }
            Ok(Spec::Object(props))
        }

        other @ (Value::Callable(_) | Value::Date(_)) => {
            Err(InferError::Unsupported(reflect(other)))
        }
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::check;

    fn v(j: serde_json::Value) -> Value {
        Value::from(j)
    }

    #[test]
    fn scalars_map_to_kind_matchers() {
        assert_eq!(infer(&Value::Undefined), Ok(Spec::Undefined));
        assert_eq!(infer(&v(serde_json::json!(null))), Ok(Spec::Null));
        assert_eq!(infer(&v(serde_json::json!(true))), Ok(Spec::Boolean));
        assert_eq!(infer(&v(serde_json::json!(2.5))), Ok(Spec::Number));
        assert_eq!(infer(&v(serde_json::json!("s"))), Ok(Spec::String));
    }

    #[test]
    fn empty_array_infers_array_of_any() {
        assert_eq!(infer(&v(serde_json::json!([]))), Ok(Spec::array(None)));
    }

    #[test]
    fn homogeneous_array_dedups_to_one_shape() {
        let big: Vec<i32> = (0..100).collect();
        let spec = infer(&v(serde_json::json!(big))).unwrap();
        assert_eq!(spec, Spec::array(Some(Spec::Number)));
    }

    #[test]
    fn mixed_array_unions_in_first_seen_order() {
        let spec = infer(&v(serde_json::json!([1, "a", 2, "b", null]))).unwrap();
        let expect = Spec::Array(Box::new(Spec::Union(vec![
            Spec::Number,
            Spec::String,
            Spec::Null,
        ])));
        assert_eq!(spec, expect);
    }

    #[test]
    fn object_shapes_dedup_structurally() {
        // two records of identical shape, one distinct
        let spec = infer(&v(serde_json::json!([
            {"id": 1, "name": "a"},
            {"id": 2, "name": "b"},
            {"id": 3}
        ])))
        .unwrap();
        let Spec::Array(elem) = spec else { panic!("expected array spec") };
        let Spec::Union(arms) = *elem else { panic!("expected union element") };
        assert_eq!(arms.len(), 2);
    }

    #[test]
    fn sampling_cap_ignores_late_elements() {
        // a string hiding past index 64 never reaches the accumulator
        let mut items: Vec<serde_json::Value> =
            (0..80).map(|n| serde_json::json!(n)).collect();
        items.push(serde_json::json!("late"));
        let spec = infer(&v(serde_json::Value::Array(items))).unwrap();
        assert_eq!(spec, Spec::array(Some(Spec::Number)));
    }

    #[test]
    fn unsupported_kinds_are_refused() {
        assert_eq!(
            infer(&Value::Callable("f".into())),
            Err(InferError::Unsupported(Kind::Callable))
        );
        assert_eq!(
            infer(&Value::Date(chrono::Utc::now())),
            Err(InferError::Unsupported(Kind::Date))
        );
        // nested unsupported values poison the whole inference
        let nested = Value::Object(indexmap::IndexMap::from([(
            "f".to_string(),
            Value::Callable("f".into()),
        )]));
        assert!(infer(&nested).is_err());
    }

    #[test]
    fn inferred_specs_validate_their_source() {
        let sample = v(serde_json::json!({
            "id": 7,
            "tags": ["a", "b"],
            "geo": {"lat": 37.4, "lon": -122.0},
            "mixed": [1, "one", null]
        }));
        let spec = infer(&sample).unwrap();
        assert!(check(&spec, &sample).success);
    }
}
