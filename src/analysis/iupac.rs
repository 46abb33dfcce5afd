//! IUPAC nucleotide alphabet: classification, expansion and degeneracy counting

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Canonical DNA bases
pub const CANONICAL_BASES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Degenerate IUPAC codes (each stands for two or more bases)
pub const DEGENERATE_BASES: [char; 11] = ['R', 'Y', 'S', 'W', 'K', 'M', 'B', 'D', 'H', 'V', 'N'];

/// Gap characters used in alignments
pub const GAP_CHARS: [char; 2] = ['-', '.'];

/// Degenerate code to canonical bases mapping
pub static DEGENERATE_TO_BASES: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert('R', "AG");
    map.insert('Y', "CT");
    map.insert('S', "CG");
    map.insert('W', "AT");
    map.insert('K', "GT");
    map.insert('M', "AC");
    map.insert('B', "CGT");
    map.insert('D', "AGT");
    map.insert('H', "ACT");
    map.insert('V', "ACG");
    map.insert('N', "ACGT");
    map
});

/// Check if a character is a canonical base. Case-insensitive; U counts as T.
pub fn is_canonical_base(c: char) -> bool {
    matches!(c.to_ascii_uppercase(), 'A' | 'C' | 'G' | 'T' | 'U')
}

/// Check if a character is a degenerate IUPAC code. Case-insensitive.
pub fn is_degenerate_base(c: char) -> bool {
    matches!(
        c.to_ascii_uppercase(),
        'R' | 'Y' | 'S' | 'W' | 'K' | 'M' | 'B' | 'D' | 'H' | 'V' | 'N'
    )
}

/// Check if a character is a gap
pub fn is_gap(c: char) -> bool {
    matches!(c, '-' | '.')
}

/// Get the canonical bases represented by a degenerate code.
/// Returns `None` for canonical bases, gaps and anything outside the alphabet.
pub fn expand_degenerate(code: char) -> Option<&'static str> {
    DEGENERATE_TO_BASES.get(&code.to_ascii_uppercase()).copied()
}

/// Count degenerate codes in a sequence. Canonical bases (including U) and
/// gaps contribute nothing; so do characters outside the IUPAC alphabet.
pub fn count_degenerate_bases(seq: &str) -> usize {
    seq.chars().filter(|&c| is_degenerate_base(c)).count()
}

// ── Bitmask-based expansion containment ─────────────────────────────────────

/// Bitmask representation: bit 0 = A, bit 1 = C, bit 2 = G, bit 3 = T

/// Convert a nucleotide byte to the bitmask of bases it can stand for.
/// Case-insensitive; U maps to the T bit. Returns 0 for unrecognized bytes.
#[inline]
pub fn base_mask(b: u8) -> u8 {
    match b.to_ascii_uppercase() {
        b'A' => 0b0001,
        b'C' => 0b0010,
        b'G' => 0b0100,
        b'T' | b'U' => 0b1000,
        b'R' => 0b0101,
        b'Y' => 0b1010,
        b'S' => 0b0110,
        b'W' => 0b1001,
        b'K' => 0b1100,
        b'M' => 0b0011,
        b'B' => 0b1110,
        b'D' => 0b1101,
        b'H' => 0b1011,
        b'V' => 0b0111,
        b'N' => 0b1111,
        _ => 0,
    }
}

/// For each degenerate code, every uppercase symbol it should match for
/// free: its canonical expansion plus all codes whose expansion is
/// contained in its own (V covers M, R and S; every code is covered by N).
static PATTERN_EQUIVALENTS: Lazy<HashMap<u8, Vec<u8>>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for &code in DEGENERATE_BASES.iter() {
        let outer = base_mask(code as u8);
        let mut equiv = Vec::new();
        for &other in b"ACGTRYSWKMBDHVN" {
            let inner = base_mask(other);
            if inner & outer == inner {
                equiv.push(other);
            }
        }
        map.insert(code as u8, equiv);
    }
    map
});

/// Symbols a degenerate template byte matches without spending the error
/// budget. `None` for non-degenerate bytes.
pub(crate) fn pattern_equivalents(code: u8) -> Option<&'static [u8]> {
    PATTERN_EQUIVALENTS.get(&code).map(|v| v.as_slice())
}
