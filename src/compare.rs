//! Structural assignability between two specs.
//!
//! Evaluated as an ordered rule list; the match-arm order below *is* the
//! rule order, so `Any` wins before anything else and the union rules only
//! fire after every same-kind pair has had its chance. Object comparison is
//! exact-shape on purpose: the same key set on both sides, not a subset
//! relation, which is what makes `compare` usable for dedup during
//! inference ("same shape" must mean identical shape, not subtype).

use crate::spec::Spec;

/// True iff `left` and `right` are structurally compatible.
pub fn compare(left: &Spec, right: &Spec) -> bool {
    match (left, right) {
        (Spec::Any, _) | (_, Spec::Any) => true,

        (Spec::Undefined, Spec::Undefined)
        | (Spec::Null, Spec::Null)
        | (Spec::String, Spec::String)
        | (Spec::Number, Spec::Number)
        | (Spec::Boolean, Spec::Boolean) => true,

        (Spec::Literal(a), Spec::Literal(b)) => a == b,

        (Spec::Object(a), Spec::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, sa)| b.get(key).is_some_and(|sb| compare(sa, sb)))
        }

        (Spec::Array(a), Spec::Array(b)) => compare(a, b),

        (Spec::Tuple(a), Spec::Tuple(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(sa, sb)| compare(sa, sb))
        }

        // existential: some arm of the union must be compatible with the
        // other side; when both sides are unions this degrades to "some
        // pair of arms matches"
        (Spec::Union(arms), other) => arms.iter().any(|arm| compare(arm, other)),
        (other, Spec::Union(arms)) => arms.iter().any(|arm| compare(other, arm)),

        _ => false,
    }
}

// ------------------------------- Tests ------------------------------------ //
