//! Primer location within reads: one-shot and compile-once entry points
//!
//! Forward primers are located by where they start (the read is trimmed
//! before that offset), tail primers by where they end (the read is
//! trimmed after it).

use serde::{Deserialize, Serialize};

use super::pattern::{FuzzyPattern, PatternError};

/// A located primer occurrence within a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimerMatch {
    /// Byte offset of the occurrence: the span start (plus the caller's
    /// adjustment) for start searches, the exclusive span end for end
    /// searches
    pub pos: i64,
    /// Edits spent by the best match
    pub mismatches: u32,
}

/// Locate where a primer starts in a sequence.
///
/// `pattern` follows the `(TEMPLATE){e<=N}` dialect. Among all spans
/// within the edit budget the one with the fewest edits wins. `adj` is
/// added to the reported offset, letting callers map a window-relative
/// position back onto the full read; the addition saturates at the `i64`
/// extremes instead of overflowing.
///
/// Returns `Ok(None)` when nothing matches within the budget; a malformed
/// pattern is an error, not a miss.
pub fn find_primer_start(
    sequence: &str,
    pattern: &str,
    adj: i64,
) -> Result<Option<PrimerMatch>, PatternError> {
    let compiled = FuzzyPattern::compile(pattern)?;
    Ok(locate_start(&compiled, sequence, adj))
}

/// Locate where a primer ends in a sequence.
///
/// Matching is identical to [`find_primer_start`]; the reported offset is
/// one past the last matched symbol.
pub fn find_primer_end(sequence: &str, pattern: &str) -> Result<Option<PrimerMatch>, PatternError> {
    let compiled = FuzzyPattern::compile(pattern)?;
    Ok(locate_end(&compiled, sequence))
}

/// Compiled-pattern form of [`find_primer_start`], for applying one primer
/// to many reads.
pub fn locate_start(pattern: &FuzzyPattern, sequence: &str, adj: i64) -> Option<PrimerMatch> {
    pattern.search(sequence).map(|hit| PrimerMatch {
        pos: (hit.start as i64).saturating_add(adj),
        mismatches: hit.edits,
    })
}

/// Compiled-pattern form of [`find_primer_end`].
pub fn locate_end(pattern: &FuzzyPattern, sequence: &str) -> Option<PrimerMatch> {
    pattern.search(sequence).map(|hit| PrimerMatch {
        pos: hit.end as i64,
        mismatches: hit.edits,
    })
}
