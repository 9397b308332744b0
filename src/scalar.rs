use serde_json::Value;

use crate::options::CompareOptions;

/// True if the text, after trimming leading/trailing whitespace, is empty.
pub fn is_blank_or_whitespace(text: &str) -> bool {
    text.trim().is_empty()
}

/// True for the two absent-value sentinels: a missing value (`None`) or an
/// explicit JSON null. Falsy-but-present values like `0` or `""` are not
/// nullish.
pub fn is_nullish(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

/// Coarse structural kind used by the per-field/per-element dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CoarseKind {
    Scalar,
    Sequence,
    Record,
}

pub(crate) fn coarse_kind(v: &Value) -> CoarseKind {
    match v {
        Value::Array(_) => CoarseKind::Sequence,
        Value::Object(_) => CoarseKind::Record,
        _ => CoarseKind::Scalar,
    }
}

/// Fine-grained kind consulted only under `type_sensitive` sequence matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PrimitiveKind {
    Null,
    Bool,
    Number,
    String,
    Sequence,
    Record,
}

pub(crate) fn primitive_kind(v: &Value) -> PrimitiveKind {
    match v {
        Value::Null => PrimitiveKind::Null,
        Value::Bool(_) => PrimitiveKind::Bool,
        Value::Number(_) => PrimitiveKind::Number,
        Value::String(_) => PrimitiveKind::String,
        Value::Array(_) => PrimitiveKind::Sequence,
        Value::Object(_) => PrimitiveKind::Record,
    }
}

/// Scalar equality under the case rule. Case-insensitive comparison goes
/// through the string representation uniformly, numbers and booleans included;
/// case-sensitive comparison is strict value equality.
pub(crate) fn scalars_equal(a: &Value, b: &Value, opts: &CompareOptions) -> bool {
    if opts.case_sensitive {
        a == b
    } else {
        // ASCII folding only; locale-aware case mapping is out of scope.
        scalar_repr(a).eq_ignore_ascii_case(&scalar_repr(b))
    }
}

/// String representation of a scalar leaf. Strings are taken verbatim (no JSON
/// quoting); null, booleans and numbers render as their JSON text.
fn scalar_repr(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn blank_detection() {
        assert!(is_blank_or_whitespace(""));
        assert!(is_blank_or_whitespace("   \t\n"));
        assert!(!is_blank_or_whitespace(" test "));
    }

    #[test]
    fn nullish_detection() {
        assert!(is_nullish(None));
        assert!(is_nullish(Some(&Value::Null)));
        assert!(!is_nullish(Some(&json!(0))));
        assert!(!is_nullish(Some(&json!(""))));
        assert!(!is_nullish(Some(&json!(false))));
    }

    #[test]
    fn stringified_comparison_is_the_uniform_path() {
        let opts = CompareOptions::default();
        // Number vs string with the same rendering compare equal when lenient.
        assert!(scalars_equal(&json!(1), &json!("1"), &opts));
        assert!(scalars_equal(&json!(true), &json!("TRUE"), &opts));
        // Strict mode falls back to value equality.
        let strict = CompareOptions::new().case_sensitive(true);
        assert!(!scalars_equal(&json!(1), &json!("1"), &strict));
        assert!(scalars_equal(&json!(1), &json!(1), &strict));
    }

    #[test]
    fn kind_classification() {
        assert_eq!(coarse_kind(&json!("x")), CoarseKind::Scalar);
        assert_eq!(coarse_kind(&json!(null)), CoarseKind::Scalar);
        assert_eq!(coarse_kind(&json!([1])), CoarseKind::Sequence);
        assert_eq!(coarse_kind(&json!({"a": 1})), CoarseKind::Record);
        assert_eq!(primitive_kind(&json!(1)), PrimitiveKind::Number);
        assert_eq!(primitive_kind(&json!("1")), PrimitiveKind::String);
    }
}
