use serde_json::Value;

use crate::errors::{CompareError, Result};
use crate::options::CompareOptions;
use crate::record::{self, MAX_DEPTH};
use crate::scalar;

/// Structural equality of two ordered sequences. With `index_sensitive` the
/// comparison is positional; otherwise the sequences are treated as multisets
/// and every element of `a` must consume a distinct equal counterpart in `b`.
pub(crate) fn sequences_equal(
    a: &[Value],
    b: &[Value],
    opts: &CompareOptions,
    depth: usize,
) -> Result<bool> {
    if depth == 0 {
        return Err(CompareError::DepthLimit(MAX_DEPTH));
    }
    if a.len() != b.len() {
        return Ok(false);
    }
    if opts.index_sensitive {
        for (ea, eb) in a.iter().zip(b) {
            if !elements_equal(ea, eb, opts, depth - 1)? {
                return Ok(false);
            }
        }
        return Ok(true);
    }
    // Multiset matching. Element equality is an equivalence relation, so a
    // greedy first-fit pairing finds a bijection whenever one exists.
    let mut used = vec![false; b.len()];
    'outer: for ea in a {
        for (i, eb) in b.iter().enumerate() {
            if !used[i] && elements_equal(ea, eb, opts, depth - 1)? {
                used[i] = true;
                continue 'outer;
            }
        }
        return Ok(false);
    }
    Ok(true)
}

/// Per-element rule: the shared per-value rule, tightened by `type_sensitive`
/// so that scalars must also agree on their primitive kind.
fn elements_equal(a: &Value, b: &Value, opts: &CompareOptions, depth: usize) -> Result<bool> {
    if opts.type_sensitive && scalar::primitive_kind(a) != scalar::primitive_kind(b) {
        return Ok(false);
    }
    record::values_equal(a, b, opts, depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn as_vec(v: &Value) -> &Vec<Value> {
        v.as_array().unwrap()
    }

    fn eq(a: &Value, b: &Value, opts: &CompareOptions) -> bool {
        sequences_equal(as_vec(a), as_vec(b), opts, MAX_DEPTH).unwrap()
    }

    #[test]
    fn length_mismatch_is_immediate_false() {
        let opts = CompareOptions::default();
        assert_eq!(eq(&json!([1, 2]), &json!([1, 2, 3]), &opts), false);
    }

    #[test]
    fn positional_vs_multiset_matching() {
        let a = json!([1, 2]);
        let b = json!([2, 1]);
        let positional = CompareOptions::new().index_sensitive(true);
        assert_eq!(eq(&a, &b, &positional), false);
        let lenient = CompareOptions::default();
        assert!(eq(&a, &b, &lenient));
    }

    #[test]
    fn multiset_matching_respects_multiplicity() {
        let opts = CompareOptions::default();
        assert_eq!(eq(&json!([1, 1, 2]), &json!([1, 2, 2]), &opts), false);
        assert!(eq(&json!([1, 2, 2]), &json!([2, 1, 2]), &opts));
    }

    #[test]
    fn type_sensitivity_separates_primitive_kinds() {
        let strict_type = CompareOptions::new().type_sensitive(true);
        assert_eq!(eq(&json!([1]), &json!(["1"]), &strict_type), false);
        let lenient = CompareOptions::default();
        assert!(eq(&json!([1]), &json!(["1"]), &lenient));
    }

    #[test]
    fn sequences_of_records_recurse() {
        let a = json!([{"k": "A"}, {"k": "b"}]);
        let b = json!([{"k": "B"}, {"k": "a"}]);
        let lenient = CompareOptions::default();
        assert!(eq(&a, &b, &lenient));
        let cased = CompareOptions::new().case_sensitive(true);
        assert_eq!(eq(&a, &b, &cased), false);
    }

    #[test]
    fn coarse_kind_mismatch_in_elements() {
        let opts = CompareOptions::default();
        assert_eq!(eq(&json!([[1]]), &json!([1]), &opts), false);
    }
}
