//! Per-row degeneracy counts over aligned sequence matrices

use serde::{Deserialize, Serialize};

use super::iupac::count_degenerate_bases;
use super::matrix::SeqMatrix;

/// Degenerate-code count for one matrix row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegenerateCount {
    /// Row identifier, as held by the matrix
    pub id: String,
    /// Cells holding a degenerate code, case-insensitive; gaps and
    /// canonical bases (U included) contribute nothing
    pub count: usize,
}

/// Count degenerate cells per row, in matrix row order. Rows without any
/// degenerate cell report zero rather than being dropped.
pub fn count_degenerates(matrix: &SeqMatrix) -> Vec<DegenerateCount> {
    matrix
        .iter()
        .map(|(id, row)| DegenerateCount {
            id: id.to_string(),
            count: count_degenerate_bases(row),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn fixture() -> SeqMatrix {
        SeqMatrix::from_rows([("0", "AGTC"), ("1", "ARWS"), ("3", "GTCM"), ("4", "ATGN")])
            .unwrap()
    }

    #[test]
    fn test_counts_per_row() {
        let counts = count_degenerates(&fixture());
        let expected = [("0", 0), ("1", 3), ("3", 1), ("4", 1)];
        assert_eq!(counts.len(), expected.len());
        for (got, (id, count)) in counts.iter().zip(expected) {
            assert_eq!(got.id, id);
            assert_eq!(got.count, count, "row {}", id);
        }
    }

    #[test]
    fn test_counts_case_insensitive() {
        let matrix = SeqMatrix::from_rows([("upper", "ARWS"), ("lower", "arws")]).unwrap();
        let counts = count_degenerates(&matrix);
        assert_eq!(counts[0].count, 3);
        assert_eq!(counts[1].count, 3);
    }

    #[test]
    fn test_gaps_and_u_are_neutral() {
        let matrix = SeqMatrix::from_rows([("a", "A-N.U"), ("b", "-...-")]).unwrap();
        let counts = count_degenerates(&matrix);
        assert_eq!(counts[0].count, 1);
        assert_eq!(counts[1].count, 0);
    }

    #[test]
    fn test_counts_follow_rows_under_reordering() {
        let forward = count_degenerates(&fixture());
        let reversed = count_degenerates(
            &SeqMatrix::from_rows([("4", "ATGN"), ("3", "GTCM"), ("1", "ARWS"), ("0", "AGTC")])
                .unwrap(),
        );

        assert_eq!(reversed[0].id, "4");

        let by_id = |counts: &[DegenerateCount]| -> HashMap<String, usize> {
            counts.iter().map(|c| (c.id.clone(), c.count)).collect()
        };
        assert_eq!(by_id(&forward), by_id(&reversed));
    }

    #[test]
    fn test_counts_never_exceed_width() {
        let matrix = SeqMatrix::from_rows([("all", "RYSWKMBDHVN"), ("none", "ACGTACGTACG")])
            .unwrap();
        for entry in count_degenerates(&matrix) {
            assert!(entry.count <= matrix.n_cols());
        }
        assert_eq!(count_degenerates(&matrix)[0].count, 11);
    }

    #[test]
    fn test_empty_matrix_yields_no_counts() {
        let matrix = SeqMatrix::from_rows(std::iter::empty::<(&str, &str)>()).unwrap();
        assert!(count_degenerates(&matrix).is_empty());
    }
}
