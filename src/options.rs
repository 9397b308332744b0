use serde::{Deserialize, Serialize};

/// Knobs governing scalar and sequence comparison. Every flag defaults to the
/// lenient setting; the options travel unchanged through the whole recursion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompareOptions {
    /// Compare scalar string representations exactly instead of after ASCII
    /// lower-casing.
    pub case_sensitive: bool,
    /// Require matched sequence elements to share the same primitive kind
    /// (a numeric 1 does not equal the string "1").
    pub type_sensitive: bool,
    /// Require sequence elements to match at the same position instead of
    /// permitting any bijective matching.
    pub index_sensitive: bool,
}

impl CompareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    pub fn type_sensitive(mut self, yes: bool) -> Self {
        self.type_sensitive = yes;
        self
    }

    pub fn index_sensitive(mut self, yes: bool) -> Self {
        self.index_sensitive = yes;
        self
    }
}
