use itertools::Itertools;
use serde_json::{Map, Value};

use crate::errors::{CompareError, Result};
use crate::options::CompareOptions;
use crate::scalar;
use crate::sequence;

/// Recursion cap for nested values. Matches serde_json's own parse recursion
/// limit, so any tree read from JSON text stays within it.
pub(crate) const MAX_DEPTH: usize = 128;

/// Structural equality of two keyed records. Key sets must agree exactly; each
/// field is then compared under the per-value rule, stopping at the first
/// mismatch.
pub(crate) fn records_equal(
    a: &Map<String, Value>,
    b: &Map<String, Value>,
    opts: &CompareOptions,
    depth: usize,
) -> Result<bool> {
    if depth == 0 {
        return Err(CompareError::DepthLimit(MAX_DEPTH));
    }
    if a.len() != b.len() {
        return Ok(false);
    }
    // Each side contributes its own key set; order within the maps is
    // irrelevant to record equality.
    if !a.keys().sorted().eq(b.keys().sorted()) {
        return Ok(false);
    }
    for (key, va) in a {
        let vb = match b.get(key) {
            Some(v) => v,
            None => return Ok(false),
        };
        if !values_equal(va, vb, opts, depth - 1)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Per-value rule shared by record fields and sequence elements: values of
/// different coarse kinds never compare equal; scalars use the case rule;
/// sequences and records recurse with the same options.
pub(crate) fn values_equal(a: &Value, b: &Value, opts: &CompareOptions, depth: usize) -> Result<bool> {
    if scalar::coarse_kind(a) != scalar::coarse_kind(b) {
        return Ok(false);
    }
    match (a, b) {
        (Value::Array(xa), Value::Array(xb)) => sequence::sequences_equal(xa, xb, opts, depth),
        (Value::Object(ma), Value::Object(mb)) => records_equal(ma, mb, opts, depth),
        _ => Ok(scalar::scalars_equal(a, b, opts)),
    }
}
