//! Primersite - Fuzzy Primer Location and Degeneracy Counting
//!
//! A Rust library for locating primer sequences in DNA reads with a
//! bounded mismatch budget, and for counting degenerate (IUPAC
//! ambiguity) bases across aligned sequence matrices.

pub mod analysis;

pub use analysis::*;
