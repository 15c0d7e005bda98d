//! Row-by-row, cell-by-cell comparison of two result sets.

use std::fmt;

use fixparity_types::{Row, Value};
use serde::{Deserialize, Serialize};

/// One divergence between the reference rows and the rows under test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mismatch {
    /// The two sides returned a different number of rows. When this is
    /// reported no cells are compared.
    RowCount { expected: usize, actual: usize },
    /// Row `row` has a different number of columns on each side.
    Arity {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// Cell `(row, column)` differs in storage class or value.
    Cell {
        row: usize,
        column: usize,
        expected: Value,
        actual: Value,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowCount { expected, actual } => {
                write!(f, "row count: expected {expected}, got {actual}")
            }
            Self::Arity {
                row,
                expected,
                actual,
            } => write!(f, "row {row}: expected {expected} columns, got {actual}"),
            Self::Cell {
                row,
                column,
                expected,
                actual,
            } => write!(
                f,
                "row {row} column {column}: expected {} {expected}, got {} {actual}",
                expected.kind(),
                actual.kind()
            ),
        }
    }
}

/// Compare `actual` against `expected`.
///
/// An empty result means the two sides agree. Cells match only when their
/// storage classes match, so `Integer(1)` never equals `Real(1.0)` and a
/// blob never equals text with the same bytes.
pub fn compare(expected: &[Row], actual: &[Row]) -> Vec<Mismatch> {
    if expected.len() != actual.len() {
        return vec![Mismatch::RowCount {
            expected: expected.len(),
            actual: actual.len(),
        }];
    }

    let mut mismatches = Vec::new();
    for (row, (exp, act)) in expected.iter().zip(actual).enumerate() {
        if exp.len() != act.len() {
            mismatches.push(Mismatch::Arity {
                row,
                expected: exp.len(),
                actual: act.len(),
            });
            continue;
        }
        for (column, (e, a)) in exp.values().iter().zip(act.values()).enumerate() {
            if e != a {
                mismatches.push(Mismatch::Cell {
                    row,
                    column,
                    expected: e.clone(),
                    actual: a.clone(),
                });
            }
        }
    }
    mismatches
}
