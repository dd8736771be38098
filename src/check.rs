//! Recursive validation of a value against a spec.
//!
//! `check` never raises: every failure becomes a located entry in the
//! returned report. Container checks keep walking after the first failure,
//! so one pass reports everything that is wrong (object/array/tuple errors
//! are concatenated, not short-circuited). Paths are the usual dotted and
//! bracketed form, rooted at `value` (e.g. `value.items[2].name`).

use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::reflect::{Kind, reflect};
use crate::spec::{Literal, Spec};
use crate::value::Value;

/// One located validation failure.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CheckError {
    /// Where in the value tree the failure occurred (`value.a[0].b`).
    pub binding: String,
    pub message: String,
    pub expect: String,
    pub actual: String,
}

/// Outcome of a `check` call. `success` iff `errors` is empty.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Report {
    pub success: bool,
    pub errors: Vec<CheckError>,
}

impl CheckError {
    fn mismatch(binding: &str, expect: String, actual: Kind) -> Self {
        CheckError {
            message: format!("{binding} should be of type {expect}, got {actual}"),
            binding: binding.to_string(),
            expect,
            actual: actual.name().to_string(),
        }
    }

    fn required(binding: &str, expect: String) -> Self {
        CheckError {
            message: format!("required property {binding} is missing"),
            binding: binding.to_string(),
            expect,
            actual: Kind::Undefined.name().to_string(),
        }
    }

    fn length(binding: &str, expect: usize, actual: usize) -> Self {
        CheckError {
            message: format!("{binding} should have {expect} elements, got {actual}"),
            binding: binding.to_string(),
            expect: format!("{expect} elements"),
            actual: format!("{actual} elements"),
        }
    }

    fn unexpected(binding: &str, actual: Kind) -> Self {
        CheckError {
            message: format!("unexpected property {binding}"),
            binding: binding.to_string(),
            expect: Kind::Undefined.name().to_string(),
            actual: actual.name().to_string(),
        }
    }
}

/// Validate `value` against `spec`. Always returns; never panics for any
/// well-formed spec/value pair.
pub fn check(spec: &Spec, value: &Value) -> Report {
    let mut errors = Vec::new();
    check_at(spec, value, "value", &mut errors);
    Report {
        success: errors.is_empty(),
        errors,
    }
}

fn check_at(spec: &Spec, value: &Value, path: &str, out: &mut Vec<CheckError>) {
    match spec {
        Spec::Any => {}

        Spec::Undefined => check_kind(Kind::Undefined, value, path, out),
        Spec::Null => check_kind(Kind::Null, value, path, out),
        Spec::String => check_kind(Kind::String, value, path, out),
        Spec::Number => check_kind(Kind::Number, value, path, out),
        Spec::Boolean => check_kind(Kind::Boolean, value, path, out),

        Spec::Literal(lit) => {
            let hit = match (lit, value) {
                (Literal::Str(want), Value::String(got)) => want == got,
                (Literal::Num(want), Value::Number(got)) => *want == OrderedFloat(*got),
                _ => false,
            };
            if !hit {
                out.push(CheckError::mismatch(path, lit.to_string(), reflect(value)));
            }
        }

        Spec::Object(props) => {
            let map = match value {
                Value::Object(map) => map,
                other => {
                    out.push(CheckError::mismatch(path, spec.expected(), reflect(other)));
                    return;
                }
            };
            // pass 1: keys the spec never declared
            for (key, present) in map {
                if !props.contains_key(key) {
                    let child = format!("{path}.{key}");
                    out.push(CheckError::unexpected(&child, reflect(present)));
                }
            }
            // pass 2: declared keys, required or recursed
            for (key, nested) in props {
                let child = format!("{path}.{key}");
                let entry = Value::property(map, key);
                if matches!(entry, Value::Undefined) && !matches!(nested, Spec::Undefined) {
                    out.push(CheckError::required(&child, nested.expected()));
                } else {
                    check_at(nested, entry, &child, out);
                }
            }
        }

        Spec::Array(elem) => {
            let items = match value {
                Value::Array(items) => items,
                other => {
                    out.push(CheckError::mismatch(path, spec.expected(), reflect(other)));
                    return;
                }
            };
            for (i, item) in items.iter().enumerate() {
                check_at(elem, item, &format!("{path}[{i}]"), out);
            }
        }

        Spec::Tuple(types) => {
            let items = match value {
                Value::Array(items) => items,
                other => {
                    out.push(CheckError::mismatch(path, spec.expected(), reflect(other)));
                    return;
                }
            };
            if items.len() != types.len() {
                out.push(CheckError::length(path, types.len(), items.len()));
                return;
            }
            for (i, (ty, item)) in types.iter().zip(items).enumerate() {
                check_at(ty, item, &format!("{path}[{i}]"), out);
            }
        }

        Spec::Union(arms) => {
            // existential: one passing arm validates the whole union
            for arm in arms {
                let mut arm_errors = Vec::new();
                check_at(arm, value, path, &mut arm_errors);
                if arm_errors.is_empty() {
                    return;
                }
            }
            out.push(CheckError::mismatch(path, spec.expected(), reflect(value)));
        }
    }
}

fn check_kind(want: Kind, value: &Value, path: &str, out: &mut Vec<CheckError>) {
    let got = reflect(value);
    if got != want {
        out.push(CheckError::mismatch(path, want.name().to_string(), got));
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Spec;

    fn v(j: serde_json::Value) -> Value {
        Value::from(j)
    }

    #[test]
    fn primitives_match_their_kind() {
        assert!(check(&Spec::Number, &v(serde_json::json!(1.5))).success);
        assert!(check(&Spec::String, &v(serde_json::json!("x"))).success);
        assert!(check(&Spec::Null, &v(serde_json::json!(null))).success);
        assert!(check(&Spec::Undefined, &Value::Undefined).success);

        let report = check(&Spec::Number, &v(serde_json::json!("nope")));
        assert!(!report.success);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].binding, "value");
        assert_eq!(report.errors[0].expect, "number");
        assert_eq!(report.errors[0].actual, "string");
    }

    #[test]
    fn literal_needs_kind_and_value_equality() {
        let spec = Spec::str_literal("on");
        assert!(check(&spec, &v(serde_json::json!("on"))).success);
        assert!(!check(&spec, &v(serde_json::json!("off"))).success);
        assert!(!check(&spec, &v(serde_json::json!(1))).success);

        let spec = Spec::num_literal(4.0);
        assert!(check(&spec, &v(serde_json::json!(4.0))).success);
        assert!(!check(&spec, &v(serde_json::json!(4.5))).success);
    }

    #[test]
    fn object_reports_unexpected_then_required() {
        let spec = Spec::object([("name", Spec::String), ("age", Spec::Number)]);
        let report = check(&spec, &v(serde_json::json!({"name": "x", "extra": 1})));
        assert!(!report.success);
        assert_eq!(report.errors.len(), 2);
        // unexpected scan runs before the required scan
        assert_eq!(report.errors[0].binding, "value.extra");
        assert!(report.errors[0].message.contains("unexpected"));
        assert_eq!(report.errors[1].binding, "value.age");
        assert!(report.errors[1].message.contains("required"));
    }

    #[test]
    fn undefined_property_specs_are_optional() {
        let spec = Spec::object([("opt", Spec::Undefined), ("req", Spec::Number)]);
        assert!(check(&spec, &v(serde_json::json!({"req": 3}))).success);
        // present where undefined is declared: kind mismatch
        let report = check(&spec, &v(serde_json::json!({"opt": 1, "req": 3})));
        assert!(!report.success);
        assert_eq!(report.errors[0].binding, "value.opt");
    }

    #[test]
    fn arrays_accumulate_all_element_errors() {
        let spec = Spec::array(Some(Spec::Number));
        let report = check(&spec, &v(serde_json::json!([1, "a", 2, "b"])));
        assert!(!report.success);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].binding, "value[1]");
        assert_eq!(report.errors[1].binding, "value[3]");
    }

    #[test]
    fn tuple_arity_is_a_single_length_error() {
        let spec = Spec::tuple(vec![Spec::Number, Spec::String]).unwrap();
        let report = check(&spec, &v(serde_json::json!([1])));
        assert!(!report.success);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].message.contains("2 elements"));

        assert!(check(&spec, &v(serde_json::json!([1, "x"]))).success);
    }

    #[test]
    fn union_failure_collapses_to_one_error() {
        let spec = Spec::union(vec![
            Spec::String,
            Spec::Number,
            Spec::str_literal("maybe"),
        ])
        .unwrap();
        assert!(check(&spec, &v(serde_json::json!("anything"))).success);

        let report = check(&spec, &v(serde_json::json!(true)));
        assert!(!report.success);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].expect, "string | number | maybe");
    }

    #[test]
    fn nested_paths_compose() {
        let spec = Spec::object([(
            "items",
            Spec::array(Some(Spec::object([("id", Spec::Number)]))),
        )]);
        let report = check(&spec, &v(serde_json::json!({"items": [{"id": 1}, {"id": "x"}]})));
        assert!(!report.success);
        assert_eq!(report.errors[0].binding, "value.items[1].id");
    }

    #[test]
    fn any_accepts_everything() {
        for sample in [
            Value::Undefined,
            Value::Callable("f".into()),
            v(serde_json::json!({"a": [1, null]})),
        ] {
            assert!(check(&Spec::Any, &sample).success);
        }
    }
}
