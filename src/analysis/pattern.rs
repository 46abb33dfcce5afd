//! Fuzzy primer patterns: `(TEMPLATE){e<=N}` parsing and bit-parallel search

use bio::pattern_matching::myers::{Myers, MyersBuilder};
use log::{debug, warn};
use std::fmt;
use thiserror::Error;

use super::iupac::pattern_equivalents;

/// Word width of the bit-parallel matcher
pub const MAX_TEMPLATE_LEN: usize = 64;

/// Templates below this length match promiscuously
const SHORT_TEMPLATE_LEN: usize = 10;

/// Errors from fuzzy pattern compilation.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern text does not follow the `(TEMPLATE){e<=N}` dialect.
    #[error("could not parse fuzzy pattern '{pattern}': expected (TEMPLATE){{e<=N}}")]
    Malformed { pattern: String },

    /// The budget annotation parses but is not the combined-edit form.
    #[error("unsupported budget annotation '{annotation}': only combined edits (e<=N) are supported")]
    UnsupportedBudget { annotation: String },

    /// Nothing between the parentheses.
    #[error("fuzzy pattern has an empty template")]
    EmptyTemplate,

    /// The template does not fit the matcher word.
    #[error("template has {length} symbols, limit is {limit}", limit = MAX_TEMPLATE_LEN)]
    TemplateTooLong { length: usize },
}

/// A single located occurrence of a template. `start` and `end` are byte
/// offsets into the searched text (they coincide with character offsets
/// only for ASCII input); `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternHit {
    pub start: usize,
    pub end: usize,
    pub edits: u32,
}

/// A compiled fuzzy primer pattern: a literal template plus a combined
/// substitution/insertion/deletion budget, backed by a bit-parallel
/// Myers matcher.
pub struct FuzzyPattern {
    template: Vec<u8>,
    max_edits: u8,
    iupac: bool,
    myers: Myers<u64>,
}

impl fmt::Debug for FuzzyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuzzyPattern")
            .field("template", &String::from_utf8_lossy(&self.template))
            .field("max_edits", &self.max_edits)
            .field("iupac", &self.iupac)
            .finish_non_exhaustive()
    }
}

impl FuzzyPattern {
    /// Compile a pattern with exact byte semantics: every template symbol
    /// matches only itself.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let (template, max_edits) = parse_pattern(pattern)?;
        Self::from_template(template.into_bytes(), max_edits, false)
    }

    /// Compile a pattern treating degenerate IUPAC codes in the template as
    /// character classes: `R` matches `A`, `G` or any code contained in it,
    /// without spending the edit budget. The template is uppercased and `U`
    /// is folded to `T`; sequence text is expected uppercase.
    pub fn compile_iupac(pattern: &str) -> Result<Self, PatternError> {
        let (template, max_edits) = parse_pattern(pattern)?;
        let template = template
            .bytes()
            .map(|b| match b.to_ascii_uppercase() {
                b'U' => b'T',
                up => up,
            })
            .collect();
        Self::from_template(template, max_edits, true)
    }

    fn from_template(template: Vec<u8>, max_edits: u8, iupac: bool) -> Result<Self, PatternError> {
        if template.is_empty() {
            return Err(PatternError::EmptyTemplate);
        }
        if template.len() > MAX_TEMPLATE_LEN {
            return Err(PatternError::TemplateTooLong {
                length: template.len(),
            });
        }
        if template.len() < SHORT_TEMPLATE_LEN {
            warn!(
                "fuzzy template is very short ({} symbols), matches may be spurious",
                template.len()
            );
        }

        let myers = if iupac {
            let mut builder = MyersBuilder::new();
            for &b in &template {
                if let Some(equiv) = pattern_equivalents(b) {
                    builder.ambig(b, equiv);
                }
            }
            builder.build_64(&template)
        } else {
            Myers::<u64>::new(&template)
        };

        debug!(
            "compiled fuzzy template of {} symbols, edit budget {}",
            template.len(),
            max_edits
        );
        Ok(FuzzyPattern {
            template,
            max_edits,
            iupac,
            myers,
        })
    }

    /// Search `text` for the best occurrence of the template.
    ///
    /// Among all spans within the edit budget the winner has the fewest
    /// edits, then the smallest end offset, then the smallest start offset
    /// (the longest span ending there). Deterministic for identical input.
    pub fn search(&self, text: &str) -> Option<PatternHit> {
        let bytes = text.as_bytes();

        let mut best: Option<(usize, u32)> = None;
        for (end, dist) in self.myers.find_all_end(bytes, self.max_edits) {
            let dist = u32::from(dist);
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some((end, dist));
            }
        }
        let (end_incl, edits) = best?;

        let end = end_incl + 1;
        let start = self.recover_start(bytes, end, edits);
        Some(PatternHit { start, end, edits })
    }

    /// Smallest start whose span up to `end` reaches the minimal edit
    /// count. A span within distance `edits` can deviate from the template
    /// length by at most `edits`, which bounds the scan window.
    fn recover_start(&self, bytes: &[u8], end: usize, edits: u32) -> usize {
        let m = self.template.len();
        let d = edits as usize;
        let lo = end.saturating_sub(m + d);
        let hi = end.saturating_sub(m.saturating_sub(d)).min(end);

        let mut best = (u32::MAX, end);
        for start in lo..=hi {
            let cost = self.span_edits(&bytes[start..end]);
            if cost < best.0 {
                best = (cost, start);
            }
        }
        best.1
    }

    /// Edit distance between the template and one text span, honoring the
    /// degenerate equivalences the matcher was built with.
    fn span_edits(&self, span: &[u8]) -> u32 {
        let n = span.len();
        let mut prev: Vec<u32> = (0..=n as u32).collect();
        let mut curr: Vec<u32> = vec![0; n + 1];
        for (i, &p) in self.template.iter().enumerate() {
            curr[0] = i as u32 + 1;
            for (j, &t) in span.iter().enumerate() {
                let sub = prev[j] + u32::from(!self.symbols_match(p, t));
                curr[j + 1] = sub.min(prev[j + 1] + 1).min(curr[j] + 1);
            }
            std::mem::swap(&mut prev, &mut curr);
        }
        prev[n]
    }

    fn symbols_match(&self, pattern_byte: u8, text_byte: u8) -> bool {
        if pattern_byte == text_byte {
            return true;
        }
        self.iupac
            && pattern_equivalents(pattern_byte).map_or(false, |equiv| equiv.contains(&text_byte))
    }
}

/// Split a pattern into its literal template and edit budget. A bare
/// literal with no annotation syntax compiles to budget 0.
fn parse_pattern(pattern: &str) -> Result<(String, u8), PatternError> {
    let malformed = || PatternError::Malformed {
        pattern: pattern.to_string(),
    };

    let trimmed = pattern.trim();
    if !trimmed.contains(['(', ')', '{', '}']) {
        return Ok((trimmed.to_string(), 0));
    }

    let inner = trimmed.strip_prefix('(').ok_or_else(malformed)?;
    let (template, rest) = inner.rsplit_once(')').ok_or_else(malformed)?;
    if template.contains(['(', ')', '{', '}']) {
        return Err(malformed());
    }

    let rest = rest.trim();
    if rest.is_empty() {
        return Ok((template.to_string(), 0));
    }

    let annotation = rest
        .strip_prefix('{')
        .and_then(|r| r.strip_suffix('}'))
        .ok_or_else(malformed)?;
    let budget_text = annotation
        .strip_prefix("e<=")
        .ok_or_else(|| PatternError::UnsupportedBudget {
            annotation: annotation.to_string(),
        })?;
    let max_edits: u8 = budget_text.trim().parse().map_err(|_| malformed())?;

    Ok((template.to_string(), max_edits))
}
