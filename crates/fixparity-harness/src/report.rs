use std::path::Path;

use fixparity_error::{ParityError, Result};
use serde::{Deserialize, Serialize};

use crate::runner::{ParityOutcome, ParityVerdict};

/// JSON schema version for the parity report format.
pub const REPORT_SCHEMA_V1: &str = "fixparity.report.v1";

/// Top-level report for one parity run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParityReport {
    pub schema_version: String,
    /// Name of the reference driver.
    pub reference: String,
    /// Name of the driver under test.
    pub candidate: String,
    pub fixture: String,
    pub summary: ReportSummary,
    pub verdicts: Vec<ParityVerdict>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
}

impl ReportSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errored
    }
}

impl ParityReport {
    pub fn new(
        reference: impl Into<String>,
        candidate: impl Into<String>,
        fixture: &Path,
        verdicts: Vec<ParityVerdict>,
    ) -> Self {
        let mut summary = ReportSummary::default();
        for v in &verdicts {
            match v.outcome {
                ParityOutcome::Passed => summary.passed += 1,
                ParityOutcome::Failed => summary.failed += 1,
                ParityOutcome::Errored => summary.errored += 1,
            }
        }
        Self {
            schema_version: REPORT_SCHEMA_V1.to_owned(),
            reference: reference.into(),
            candidate: candidate.into(),
            fixture: fixture.to_string_lossy().into_owned(),
            summary,
            verdicts,
        }
    }

    /// Every query passed.
    pub fn is_clean(&self) -> bool {
        self.summary.passed == self.verdicts.len()
    }

    /// Verdicts that did not pass, in run order.
    pub fn failures(&self) -> impl Iterator<Item = &ParityVerdict> {
        self.verdicts.iter().filter(|v| !v.is_passed())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ParityError::Io(e.into()))
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::Mismatch;
    use crate::runner::FetchMode;

    fn verdict(outcome: ParityOutcome) -> ParityVerdict {
        ParityVerdict {
            query: "SELECT 1".to_owned(),
            fetch: FetchMode::All,
            expected_rows: Some(1),
            actual_rows: Some(2),
            outcome,
            mismatches: vec![Mismatch::RowCount {
                expected: 1,
                actual: 2,
            }],
            error: None,
        }
    }

    #[test]
    fn summary_counts_and_schema() {
        let report = ParityReport::new(
            "rusqlite",
            "sqlite3",
            Path::new("/tmp/f.db"),
            vec![
                verdict(ParityOutcome::Passed),
                verdict(ParityOutcome::Failed),
                verdict(ParityOutcome::Errored),
            ],
        );
        assert_eq!(report.schema_version, REPORT_SCHEMA_V1);
        assert_eq!(report.summary.total(), 3);
        assert_eq!(report.failures().count(), 2);
        assert!(!report.is_clean());
    }

    #[test]
    fn json_round_trips_through_a_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("report.json");
        let report = ParityReport::new(
            "rusqlite",
            "sqlite3",
            Path::new("f.db"),
            vec![verdict(ParityOutcome::Failed)],
        );
        report.write_json(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["schema_version"], REPORT_SCHEMA_V1);
        assert_eq!(value["verdicts"][0]["outcome"], "failed");
        assert_eq!(value["verdicts"][0]["mismatches"][0]["kind"], "row_count");

        let back: ParityReport = serde_json::from_str(&text).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn empty_run_is_clean() {
        let report = ParityReport::new("a", "b", Path::new("f.db"), Vec::new());
        assert!(report.is_clean());
    }
}
