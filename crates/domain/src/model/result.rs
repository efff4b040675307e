use serde::Serialize;

use super::CountKind;

/// A single computed value, tagged with the kind that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub kind: CountKind,
    pub value: usize,
}

/// Ordered results of one `count` invocation.
///
/// `entries` lines up one-to-one with the effective request; `source` is the
/// file path, or `None` when the input was standard input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountResult {
    #[serde(rename = "counts")]
    pub entries: Vec<CountEntry>,
    pub source: Option<String>,
}

impl CountResult {
    pub fn new(entries: Vec<CountEntry>, source: Option<String>) -> Self {
        Self { entries, source }
    }

    /// Counts in request order, without the source label.
    pub fn values(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.value).collect()
    }
}
