//! Counting algorithms.
//!
//! Each algorithm is a pure function over already-resolved content. Text
//! kinds require decoded input; `tally` enforces that pairing.

use ccwc_shared_kernel::{ByteCount, CharCount, DomainError, DomainResult, LineCount, WordCount};

use crate::model::{ContentUnit, CountKind};

/// Length of the raw content.
#[inline]
pub fn count_bytes(bytes: &[u8]) -> ByteCount {
    ByteCount::new(bytes.len())
}

/// Number of `\n` terminators.
///
/// A final line without a terminator does not contribute.
#[inline]
pub fn count_lines(text: &str) -> LineCount {
    LineCount::new(bytecount::count(text.as_bytes(), b'\n'))
}

/// Number of maximal runs of non-whitespace characters.
///
/// Whitespace is anything with the Unicode `White_Space` property.
pub fn count_words(text: &str) -> WordCount {
    let mut words = WordCount::zero();
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        words += 1;
        // consume the rest of the run
        for c in chars.by_ref() {
            if c.is_whitespace() {
                break;
            }
        }
    }

    words
}

/// Number of Unicode scalar values.
#[inline]
pub fn count_chars(text: &str) -> CharCount {
    CharCount::new(bytecount::num_chars(text.as_bytes()))
}

/// Apply the algorithm for `kind` to `content`.
///
/// # Errors
///
/// Returns [`DomainError::InvalidInput`] when a text kind is handed raw bytes.
pub fn tally(kind: CountKind, content: &ContentUnit) -> DomainResult<usize> {
    let value = match kind {
        CountKind::Bytes => count_bytes(content.as_bytes()).value(),
        CountKind::Lines => count_lines(decoded(kind, content)?).value(),
        CountKind::Words => count_words(decoded(kind, content)?).value(),
        CountKind::Characters => count_chars(decoded(kind, content)?).value(),
    };
    Ok(value)
}

fn decoded(kind: CountKind, content: &ContentUnit) -> DomainResult<&str> {
    content.as_text().ok_or_else(|| DomainError::InvalidInput {
        reason: format!("{kind} must be counted on decoded text"),
    })
}
