//! Parity runs: the same queries through two drivers, one verdict each.

use std::fmt;
use std::path::Path;

use fixparity_error::Result;
use fixparity_types::Row;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::comparator::{Mismatch, compare};
use crate::driver::{Driver, DriverCursor};
use crate::report::ParityReport;

/// How rows are pulled from each cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FetchMode {
    /// One `fetch_all` call.
    #[default]
    All,
    /// `fetch_one` until it returns `None`. The driver under test is cut off
    /// one row past the reference's count.
    OneAtATime,
    /// `head` calls to `fetch_one`, then `fetch_all` for the rest.
    Mixed { head: usize },
}

impl FetchMode {
    /// `cap` bounds the `fetch_one` loop of [`FetchMode::OneAtATime`].
    fn fetch(self, cursor: &mut dyn DriverCursor, cap: Option<usize>) -> Result<Vec<Row>> {
        match self {
            Self::All => cursor.fetch_all(),
            Self::OneAtATime => {
                let mut rows = Vec::new();
                while cap.is_none_or(|cap| rows.len() < cap) {
                    match cursor.fetch_one()? {
                        Some(row) => rows.push(row),
                        None => break,
                    }
                }
                Ok(rows)
            }
            Self::Mixed { head } => {
                let mut rows = Vec::with_capacity(head);
                for _ in 0..head {
                    match cursor.fetch_one()? {
                        Some(row) => rows.push(row),
                        None => return Ok(rows),
                    }
                }
                rows.extend(cursor.fetch_all()?);
                Ok(rows)
            }
        }
    }
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("fetch_all"),
            Self::OneAtATime => f.write_str("fetch_one"),
            Self::Mixed { head } => write!(f, "fetch_one x{head} + fetch_all"),
        }
    }
}

/// A query and the way its rows are fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryCase {
    pub sql: String,
    #[serde(default)]
    pub fetch: FetchMode,
}

impl QueryCase {
    pub fn new(sql: impl Into<String>, fetch: FetchMode) -> Self {
        Self {
            sql: sql.into(),
            fetch,
        }
    }

    pub fn all(sql: impl Into<String>) -> Self {
        Self::new(sql, FetchMode::All)
    }

    pub fn one_at_a_time(sql: impl Into<String>) -> Self {
        Self::new(sql, FetchMode::OneAtATime)
    }

    pub fn mixed(sql: impl Into<String>, head: usize) -> Self {
        Self::new(sql, FetchMode::Mixed { head })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParityOutcome {
    Passed,
    Failed,
    /// A driver failed to connect, execute, or fetch.
    Errored,
}

/// Result of one query on both drivers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParityVerdict {
    pub query: String,
    pub fetch: FetchMode,
    /// Rows returned by the reference driver, if it succeeded.
    pub expected_rows: Option<usize>,
    /// Rows returned by the driver under test, if it succeeded.
    pub actual_rows: Option<usize>,
    pub outcome: ParityOutcome,
    pub mismatches: Vec<Mismatch>,
    pub error: Option<String>,
}

impl ParityVerdict {
    pub fn is_passed(&self) -> bool {
        self.outcome == ParityOutcome::Passed
    }
}

/// Runs queries against a reference driver and a driver under test.
#[derive(Debug, Clone)]
pub struct ParityRunner<R, C> {
    reference: R,
    candidate: C,
}

impl<R: Driver, C: Driver> ParityRunner<R, C> {
    pub fn new(reference: R, candidate: C) -> Self {
        Self {
            reference,
            candidate,
        }
    }

    pub fn reference(&self) -> &R {
        &self.reference
    }

    pub fn candidate(&self) -> &C {
        &self.candidate
    }

    /// Run every query in order against `fixture`.
    ///
    /// Each query opens a fresh connection on both drivers. A driver error
    /// becomes an [`ParityOutcome::Errored`] verdict and the run moves on.
    pub fn run(&self, fixture: &Path, queries: &[QueryCase]) -> Vec<ParityVerdict> {
        info!(
            reference = self.reference.name(),
            candidate = self.candidate.name(),
            fixture = %fixture.display(),
            queries = queries.len(),
            "parity run started"
        );
        let verdicts: Vec<ParityVerdict> =
            queries.iter().map(|q| self.run_query(fixture, q)).collect();

        let passed = verdicts.iter().filter(|v| v.is_passed()).count();
        info!(
            passed,
            total = verdicts.len(),
            "parity run finished"
        );
        verdicts
    }

    /// [`run`](Self::run), wrapped in a serializable report.
    pub fn run_report(&self, fixture: &Path, queries: &[QueryCase]) -> ParityReport {
        let verdicts = self.run(fixture, queries);
        ParityReport::new(
            self.reference.name(),
            self.candidate.name(),
            fixture,
            verdicts,
        )
    }

    pub fn run_query(&self, fixture: &Path, case: &QueryCase) -> ParityVerdict {
        let expected = fetch_rows(&self.reference, fixture, case, None);
        let cap = expected.as_ref().ok().map(|rows| rows.len() + 1);
        let actual = fetch_rows(&self.candidate, fixture, case, cap);

        let mut verdict = ParityVerdict {
            query: case.sql.clone(),
            fetch: case.fetch,
            expected_rows: expected.as_ref().ok().map(Vec::len),
            actual_rows: actual.as_ref().ok().map(Vec::len),
            outcome: ParityOutcome::Passed,
            mismatches: Vec::new(),
            error: None,
        };

        match (expected, actual) {
            (Ok(expected), Ok(actual)) => {
                verdict.mismatches = compare(&expected, &actual);
                if !verdict.mismatches.is_empty() {
                    verdict.outcome = ParityOutcome::Failed;
                    warn!(
                        sql = %case.sql,
                        fetch = %case.fetch,
                        mismatches = verdict.mismatches.len(),
                        first = %verdict.mismatches[0],
                        "parity mismatch"
                    );
                }
            }
            (expected, actual) => {
                let errors: Vec<String> = [expected.err(), actual.err()]
                    .into_iter()
                    .flatten()
                    .map(|e| e.to_string())
                    .collect();
                let error = errors.join("; ");
                warn!(sql = %case.sql, error = %error, "parity query errored");
                verdict.outcome = ParityOutcome::Errored;
                verdict.error = Some(error);
            }
        }

        debug!(
            sql = %case.sql,
            outcome = ?verdict.outcome,
            expected_rows = ?verdict.expected_rows,
            actual_rows = ?verdict.actual_rows,
            "query compared"
        );
        verdict
    }
}

fn fetch_rows<D: Driver + ?Sized>(
    driver: &D,
    fixture: &Path,
    case: &QueryCase,
    cap: Option<usize>,
) -> Result<Vec<Row>> {
    let mut conn = driver.connect(fixture)?;
    let mut cursor = conn.execute(&case.sql)?;
    case.fetch.fetch(cursor.as_mut(), cap)
}
