//! JSON Schema (draft-04) export.
//!
//! Pure structural mapping, one rule per spec kind; the only thing added at
//! the top level is the `$schema` marker, placed first in the document
//! (preserve_order makes that observable). Tuples use the draft-04 array
//! form of `items` plus `additionalItems: false` and exact min/max bounds.

use serde_json::{Value as Json, json};

use crate::spec::{Literal, Spec};

pub const DRAFT: &str = "http://json-schema.org/draft-04/schema#";

/// Render `spec` as a standalone JSON Schema document.
pub fn schema(spec: &Spec) -> Json {
    let fragment = emit(spec);
    let mut doc = serde_json::Map::new();
    doc.insert("$schema".to_string(), Json::from(DRAFT));
    if let Json::Object(fields) = fragment {
        doc.extend(fields);
    }
    Json::Object(doc)
}

fn emit(spec: &Spec) -> Json {
    match spec {
        Spec::Any => json!({}),

        // draft-04 has no undefined; both map to null
        Spec::Undefined | Spec::Null => json!({ "type": "null" }),

        Spec::String => json!({ "type": "string" }),
        Spec::Number => json!({ "type": "number" }),
        Spec::Boolean => json!({ "type": "boolean" }),

        Spec::Literal(Literal::Str(s)) => json!({ "type": "string", "pattern": s }),
        Spec::Literal(Literal::Num(n)) => json!({
            "type": "number",
            "minimum": json_num_pref_i64(n.0),
            "maximum": json_num_pref_i64(n.0),
        }),

        Spec::Object(props) => {
            let mut fields = serde_json::Map::new();
            let mut required: Vec<Json> = Vec::new();
            for (key, nested) in props {
                fields.insert(key.clone(), emit(nested));
                if !matches!(nested, Spec::Undefined) {
                    required.push(Json::from(key.clone()));
                }
            }
            json!({
                "type": "object",
                "properties": Json::Object(fields),
                "required": Json::Array(required),
            })
        }

        Spec::Array(elem) => json!({ "type": "array", "items": emit(elem) }),

        Spec::Tuple(types) => json!({
            "type": "array",
            "items": types.iter().map(emit).collect::<Vec<_>>(),
            "additionalItems": false,
            "minItems": types.len(),
            "maxItems": types.len(),
        }),

        Spec::Union(arms) => json!({
            "anyOf": arms.iter().map(emit).collect::<Vec<_>>(),
        }),
    }
}

// Prefer emitting integers when exact.
fn json_num_pref_i64(n: f64) -> Json {
    if n.is_finite() && n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        Json::from(n as i64)
    } else {
        Json::from(n)
    }
}

// ------------------------------- Tests ------------------------------------ //
