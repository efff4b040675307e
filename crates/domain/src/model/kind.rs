use std::fmt;

use serde::Serialize;

/// Unit of measurement applied to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CountKind {
    Bytes,
    Characters,
    Words,
    Lines,
}

impl CountKind {
    /// Kinds reported when the caller asks for nothing in particular.
    pub const DEFAULT: [Self; 3] = [Self::Lines, Self::Words, Self::Bytes];

    /// Whether this kind is measured on raw bytes rather than decoded text.
    #[inline]
    pub const fn is_raw(self) -> bool {
        matches!(self, Self::Bytes)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bytes => "bytes",
            Self::Characters => "characters",
            Self::Words => "words",
            Self::Lines => "lines",
        }
    }
}

impl fmt::Display for CountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of requested kinds.
///
/// Duplicates are kept: every entry yields its own value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountRequest(Vec<CountKind>);

impl CountRequest {
    pub fn new(kinds: Vec<CountKind>) -> Self {
        Self(kinds)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn kinds(&self) -> &[CountKind] {
        &self.0
    }

    /// The kinds to compute, substituting [`CountKind::DEFAULT`] for an empty request.
    pub fn effective(&self) -> Vec<CountKind> {
        if self.0.is_empty() { CountKind::DEFAULT.to_vec() } else { self.0.clone() }
    }
}

impl FromIterator<CountKind> for CountRequest {
    fn from_iter<I: IntoIterator<Item = CountKind>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<CountKind>> for CountRequest {
    fn from(kinds: Vec<CountKind>) -> Self {
        Self::new(kinds)
    }
}
