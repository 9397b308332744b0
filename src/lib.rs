pub mod errors;
pub mod options;
pub mod scalar;
mod record;
mod sequence;

use errors::{CompareError, Result};
use options::CompareOptions;
use serde_json::Value;

/// The main comparator. Holds a fixed option set and applies it to every
/// comparison; the free functions below are thin wrappers over it.
pub struct Comparator {
    opts: CompareOptions,
}

impl Comparator {
    pub fn new(opts: CompareOptions) -> Self {
        Self { opts }
    }

    /// Structural equality of two keyed records under the configured options.
    /// Both arguments must be records; anything else (a sequence included) is
    /// an invalid argument kind.
    pub fn records(&self, a: &Value, b: &Value) -> Result<bool> {
        let (ma, mb) = match (a, b) {
            (Value::Object(ma), Value::Object(mb)) => (ma, mb),
            _ => {
                return Err(CompareError::InvalidKind(
                    "arguments must be records".into(),
                ))
            }
        };
        tracing::trace!(
            case_sensitive = self.opts.case_sensitive,
            "comparing records"
        );
        record::records_equal(ma, mb, &self.opts, record::MAX_DEPTH)
    }

    /// Structural equality of two ordered sequences under the configured
    /// options. Both arguments must be sequences.
    pub fn sequences(&self, a: &Value, b: &Value) -> Result<bool> {
        let (xa, xb) = match (a, b) {
            (Value::Array(xa), Value::Array(xb)) => (xa, xb),
            _ => {
                return Err(CompareError::InvalidKind(
                    "argument must be a sequence".into(),
                ))
            }
        };
        tracing::trace!(
            case_sensitive = self.opts.case_sensitive,
            type_sensitive = self.opts.type_sensitive,
            index_sensitive = self.opts.index_sensitive,
            "comparing sequences"
        );
        sequence::sequences_equal(xa, xb, &self.opts, record::MAX_DEPTH)
    }
}

/// Convenience: compare two records, configuring only case sensitivity.
pub fn compare_records(a: &Value, b: &Value, case_sensitive: bool) -> Result<bool> {
    let opts = CompareOptions::new().case_sensitive(case_sensitive);
    Comparator::new(opts).records(a, b)
}

/// Convenience: compare two sequences with every sensitivity flag explicit.
pub fn compare_sequences(
    a: &Value,
    b: &Value,
    case_sensitive: bool,
    type_sensitive: bool,
    index_sensitive: bool,
) -> Result<bool> {
    let opts = CompareOptions::new()
        .case_sensitive(case_sensitive)
        .type_sensitive(type_sensitive)
        .index_sensitive(index_sensitive);
    Comparator::new(opts).sequences(a, b)
}

/// Re-export the most-used helpers for users who call predicates directly.
pub use scalar::{is_blank_or_whitespace, is_nullish};
