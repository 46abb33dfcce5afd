//! Aligned sequence matrices keyed by sequence identifier

use std::collections::HashSet;
use thiserror::Error;

/// Errors from assembling a sequence matrix.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// A row's column count disagrees with the first row's.
    #[error("row '{id}' has {found} columns, expected {expected}")]
    RaggedRow {
        id: String,
        expected: usize,
        found: usize,
    },

    /// The same identifier appeared twice.
    #[error("duplicate sequence id '{id}'")]
    DuplicateId { id: String },
}

/// Aligned sequences, one row per identifier. Every row has the same
/// column count and row order follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeqMatrix {
    ids: Vec<String>,
    rows: Vec<String>,
    n_cols: usize,
}

impl SeqMatrix {
    /// Build a matrix from (id, row) pairs, validating as it goes.
    /// The first row fixes the column count.
    pub fn from_rows<I, S, T>(entries: I) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut matrix = SeqMatrix::default();
        for (id, row) in entries {
            let id = id.into();
            let row = row.into();
            let width = row.chars().count();
            if matrix.ids.is_empty() {
                matrix.n_cols = width;
            } else if width != matrix.n_cols {
                return Err(MatrixError::RaggedRow {
                    id,
                    expected: matrix.n_cols,
                    found: width,
                });
            }
            if !seen.insert(id.clone()) {
                return Err(MatrixError::DuplicateId { id });
            }
            matrix.ids.push(id);
            matrix.rows.push(row);
        }
        Ok(matrix)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Column count shared by every row
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Row identifiers in insertion order
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Look up one row by identifier
    pub fn row(&self, id: &str) -> Option<&str> {
        self.ids
            .iter()
            .position(|existing| existing == id)
            .map(|i| self.rows[i].as_str())
    }

    /// Iterate rows as (id, row) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ids
            .iter()
            .map(String::as_str)
            .zip(self.rows.iter().map(String::as_str))
    }
}
