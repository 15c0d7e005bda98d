//! Parity runs over real fixtures.
//!
//! The rusqlite driver is checked against itself and against a driver that
//! corrupts one row on purpose. The stock `sqlite3` shell joins in when it
//! is on `PATH`.

use std::path::{Path, PathBuf};

use fixparity::fixture::{SeededGenerator, build, presets};
use fixparity::harness::comparator::Mismatch;
use fixparity::harness::{
    BufferedCursor, Driver, DriverConnection, DriverCursor, FetchMode, ParityOutcome,
    ParityRunner, QueryCase, RusqliteDriver, ShellDriver, suite,
};
use fixparity::{Result, Row, Value, ValueKind, row};
use tempfile::TempDir;

fn fixture(spec: &fixparity::FixtureSpec) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixture.db");
    build(&path, spec, &mut SeededGenerator::new(presets::DEFAULT_SEED)).unwrap();
    (dir, path)
}

fn query(path: &Path, sql: &str) -> Box<dyn DriverCursor> {
    RusqliteDriver::new()
        .connect(path)
        .unwrap()
        .execute(sql)
        .unwrap()
}

/// Wraps the reference driver and flips the bits of every blob in one row.
struct CorruptRow {
    inner: RusqliteDriver,
    row: usize,
}

struct CorruptConnection {
    inner: Box<dyn DriverConnection>,
    row: usize,
}

impl Driver for CorruptRow {
    fn name(&self) -> &str {
        "corrupt-row"
    }

    fn connect(&self, fixture: &Path) -> Result<Box<dyn DriverConnection>> {
        Ok(Box::new(CorruptConnection {
            inner: self.inner.connect(fixture)?,
            row: self.row,
        }))
    }
}

impl DriverConnection for CorruptConnection {
    fn execute(&mut self, sql: &str) -> Result<Box<dyn DriverCursor>> {
        let mut rows = self.inner.execute(sql)?.fetch_all()?;
        if let Some(target) = rows.get_mut(self.row) {
            *target = std::mem::take(target)
                .into_values()
                .into_iter()
                .map(|v| match v {
                    Value::Blob(b) => Value::Blob(b.iter().map(|x| !x).collect()),
                    other => other,
                })
                .collect();
        }
        Ok(Box::new(BufferedCursor::new(rows)))
    }
}

#[test]
fn users_scenario() {
    let (_dir, path) = fixture(&presets::driver_tests());

    let all = query(&path, "SELECT * FROM users").fetch_all().unwrap();
    assert_eq!(all, vec![row![1, "alice"], row![2, "bob"]]);

    let ids = query(&path, "SELECT id FROM users").fetch_all().unwrap();
    assert_eq!(ids, vec![row![1], row![2]]);
    assert_eq!(ids[0].to_string(), "(1,)");

    let mut cursor = query(&path, "SELECT MAX(id) FROM users");
    assert_eq!(cursor.fetch_one().unwrap(), Some(row![2]));
}

#[test]
fn fetch_one_runs_dry_after_last_row() {
    let (_dir, path) = fixture(&presets::driver_tests());
    let mut cursor = query(&path, "SELECT * FROM users");
    assert_eq!(cursor.fetch_one().unwrap(), Some(row![1, "alice"]));
    assert_eq!(cursor.fetch_one().unwrap(), Some(row![2, "bob"]));
    assert_eq!(cursor.fetch_one().unwrap(), None);
    assert_eq!(cursor.fetch_one().unwrap(), None);
}

#[test]
fn fetch_all_equals_repeated_fetch_one() {
    let (_dir, path) = fixture(&presets::shell_tests(500));
    for case in suite::shell_queries() {
        let all = query(&path, &case.sql).fetch_all().unwrap();
        let mut cursor = query(&path, &case.sql);
        let mut one_by_one = Vec::new();
        while let Some(r) = cursor.fetch_one().unwrap() {
            one_by_one.push(r);
        }
        assert_eq!(all, one_by_one, "{}", case.sql);
    }
}

#[test]
fn index_derived_blobs_are_one_byte_each() {
    let (_dir, path) = fixture(&presets::driver_tests());
    let rows = query(&path, "SELECT data FROM blobs").fetch_all().unwrap();
    assert_eq!(rows.len(), 256);
    for (i, r) in rows.iter().enumerate() {
        assert_eq!(r[0].kind(), ValueKind::Blob, "row {i}");
        assert_eq!(r[0], Value::Blob(vec![i as u8]), "row {i}");
    }
}

#[test]
fn printable_blob_is_still_a_blob() {
    let (_dir, path) = fixture(&presets::driver_tests());
    // Byte 0x41 is ASCII 'A'.
    let rows = query(&path, "SELECT data FROM blobs WHERE id = 66").fetch_all().unwrap();
    assert_eq!(rows, vec![row![b"A".to_vec()]]);
    assert_ne!(rows, vec![row!["A"]]);
}

#[test]
fn reference_agrees_with_itself_on_every_suite() {
    let runner = ParityRunner::new(RusqliteDriver::new(), RusqliteDriver::named("rusqlite-2"));
    for (spec, queries) in [
        (presets::driver_tests(), suite::driver_queries()),
        (presets::shell_tests(300), suite::shell_queries()),
        (presets::extensions(), suite::extension_queries()),
    ] {
        let (_dir, path) = fixture(&spec);
        let report = runner.run_report(&path, &queries);
        assert!(report.is_clean(), "{:#?}", report.failures().collect::<Vec<_>>());
        assert_eq!(report.summary.total(), queries.len());
    }
}

#[test]
fn single_corrupted_row_is_one_cell_mismatch() {
    let (_dir, path) = fixture(&presets::driver_tests());
    let runner = ParityRunner::new(
        RusqliteDriver::new(),
        CorruptRow {
            inner: RusqliteDriver::new(),
            row: 5,
        },
    );

    let verdict = runner.run_query(&path, &QueryCase::all("SELECT data FROM blobs"));
    assert_eq!(verdict.outcome, ParityOutcome::Failed);
    assert_eq!(verdict.expected_rows, Some(256));
    assert_eq!(verdict.actual_rows, Some(256));
    assert_eq!(
        verdict.mismatches,
        vec![Mismatch::Cell {
            row: 5,
            column: 0,
            expected: Value::Blob(vec![5]),
            actual: Value::Blob(vec![!5u8]),
        }]
    );

    // Queries that never reach row 5 still pass.
    let verdict = runner.run_query(&path, &QueryCase::all("SELECT * FROM users"));
    assert!(verdict.is_passed());
}

#[test]
fn missing_table_errors_without_stopping_the_run() {
    let (_dir, path) = fixture(&presets::driver_tests());
    let runner = ParityRunner::new(RusqliteDriver::new(), RusqliteDriver::named("other"));
    let verdicts = runner.run(
        &path,
        &[
            QueryCase::all("SELECT * FROM no_such_table"),
            QueryCase::one_at_a_time("SELECT * FROM users"),
        ],
    );
    assert_eq!(verdicts[0].outcome, ParityOutcome::Errored);
    assert!(verdicts[0].error.as_deref().unwrap().contains("no_such_table"));
    assert!(verdicts[1].is_passed());
    assert_eq!(verdicts[1].fetch, FetchMode::OneAtATime);
}

#[test]
fn report_is_written_as_json() {
    let (dir, path) = fixture(&presets::driver_tests());
    let runner = ParityRunner::new(
        RusqliteDriver::new(),
        CorruptRow {
            inner: RusqliteDriver::new(),
            row: 0,
        },
    );
    let report = runner.run_report(&path, &suite::driver_queries());
    let out = dir.path().join("report.json");
    report.write_json(&out).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["reference"], "rusqlite");
    assert_eq!(json["candidate"], "corrupt-row");
    // Row 0 of each blob query carries a blob; the users queries have none.
    assert_eq!(json["summary"]["failed"], 2);
    assert_eq!(json["summary"]["errored"], 0);
}

#[test]
fn stock_shell_matches_reference() {
    let shell = ShellDriver::default();
    if !shell.is_available() {
        eprintln!("sqlite3 not on PATH; skipping");
        return;
    }
    let runner = ParityRunner::new(RusqliteDriver::new(), shell);
    for (spec, queries) in [
        (presets::driver_tests(), suite::driver_queries()),
        (presets::shell_tests(200), suite::shell_queries()),
        (presets::extensions(), suite::extension_queries()),
    ] {
        let (_dir, path) = fixture(&spec);
        let verdicts = runner.run(&path, &queries);
        let bad: Vec<_> = verdicts.iter().filter(|v| !v.is_passed()).collect();
        assert!(bad.is_empty(), "{bad:#?}");
    }
}

#[test]
fn stock_shell_reads_control_characters_and_infinities() {
    let shell = ShellDriver::default();
    if !shell.is_available() {
        eprintln!("sqlite3 not on PATH; skipping");
        return;
    }
    let (_dir, path) = fixture(&presets::driver_tests());
    let runner = ParityRunner::new(RusqliteDriver::new(), shell);
    let verdicts = runner.run(
        &path,
        &[
            QueryCase::all("SELECT 'a'||char(13)||'b'"),
            QueryCase::all("SELECT 'a'||char(1)||'b', 'x'||char(10)||'y'"),
            QueryCase::one_at_a_time("SELECT 1e308*10, -1e308*10"),
            QueryCase::all("SELECT 'back\\slash'||char(13), '\\'||char(13), '\\u0041'||char(13)"),
        ],
    );
    let bad: Vec<_> = verdicts.iter().filter(|v| !v.is_passed()).collect();
    assert!(bad.is_empty(), "{bad:#?}");
}

#[test]
fn row_display_matches_tuple_notation() {
    let r: Row = row![1, "alice"];
    assert_eq!(r.to_string(), "(1, 'alice')");
}
