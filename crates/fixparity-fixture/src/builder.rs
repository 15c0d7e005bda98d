//! Materialize a [`FixtureSpec`] into a fresh SQLite file.
//!
//! The contract is "fresh file or failure": any file already at the target
//! path is removed first, and a build that fails part-way removes what it
//! wrote before returning the error.

use std::path::{Path, PathBuf};

use fixparity_error::{ParityError, Result};
use fixparity_types::Value;
use rusqlite::{Connection, OpenFlags, params_from_iter};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::generator::SeededGenerator;
use crate::spec::{ColumnSpec, FixtureSpec, RowSource, TableSpec};

/// Files SQLite may leave next to a database.
const SIDECAR_SUFFIXES: [&str; 3] = ["-journal", "-wal", "-shm"];

/// PRAGMAs fixed for every build so identical specs give identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Page size for the new database (512..=65536, power of two).
    pub page_size: u32,
    /// Journal mode, `DELETE` or `OFF`. Every other mode leaves a `-journal`
    /// or `-wal` file next to the fixture.
    pub journal_mode: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            page_size: 4096,
            journal_mode: "DELETE".to_owned(),
        }
    }
}

impl BuildOptions {
    fn validate(&self) -> Result<()> {
        if !(512..=65_536).contains(&self.page_size) || !self.page_size.is_power_of_two() {
            return Err(ParityError::invalid(format!(
                "page_size {} must be a power of two in 512..=65536",
                self.page_size
            )));
        }
        if !matches!(
            self.journal_mode.to_ascii_uppercase().as_str(),
            "DELETE" | "OFF"
        ) {
            return Err(ParityError::invalid(format!(
                "journal_mode {:?} would leave sidecar files behind; use DELETE or OFF",
                self.journal_mode
            )));
        }
        Ok(())
    }
}

/// Rows written for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    pub name: String,
    pub rows: u64,
}

/// What a successful build produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSummary {
    pub path: PathBuf,
    pub seed: u64,
    pub tables: Vec<TableSummary>,
}

/// Writes fixture files. Holds only options, so one builder can produce any
/// number of fixtures.
#[derive(Debug, Clone, Default)]
pub struct DatabaseBuilder {
    options: BuildOptions,
}

impl DatabaseBuilder {
    pub const fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    pub const fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build `spec` at `path`, drawing synthetic values from `generator`.
    ///
    /// Validation errors are returned before the filesystem is touched.
    /// On a write error the partial file is removed and the error returned.
    pub fn build(
        &self,
        path: &Path,
        spec: &FixtureSpec,
        generator: &mut SeededGenerator,
    ) -> Result<BuildSummary> {
        self.options.validate()?;
        spec.validate()?;

        info!(
            path = %path.display(),
            tables = spec.tables.len(),
            seed = generator.seed(),
            "building fixture"
        );

        remove_fixture(path)?;
        match self.write_fixture(path, spec, generator) {
            Ok(summary) => {
                info!(
                    path = %path.display(),
                    tables = summary.tables.len(),
                    rows = summary.tables.iter().map(|t| t.rows).sum::<u64>(),
                    "fixture built"
                );
                Ok(summary)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "fixture build failed, removing partial file");
                if let Err(cleanup) = remove_fixture(path) {
                    warn!(path = %path.display(), error = %cleanup, "could not remove partial fixture");
                }
                Err(err)
            }
        }
    }

    fn write_fixture(
        &self,
        path: &Path,
        spec: &FixtureSpec,
        generator: &mut SeededGenerator,
    ) -> Result<BuildSummary> {
        let fail = |e: rusqlite::Error| ParityError::write(path, e);

        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let mut conn = Connection::open_with_flags(path, flags).map_err(fail)?;

        // page_size only takes effect before the first table exists.
        conn.pragma_update(None, "page_size", self.options.page_size)
            .map_err(fail)?;
        let mode: String = conn
            .pragma_update_and_check(None, "journal_mode", &self.options.journal_mode, |row| {
                row.get(0)
            })
            .map_err(fail)?;
        debug!(journal_mode = %mode, page_size = self.options.page_size, "fixture pragmas applied");

        let mut tables = Vec::with_capacity(spec.tables.len());
        for table in &spec.tables {
            let rows = write_table(&mut conn, table, generator).map_err(|err| match err {
                TableError::Sql(e) => fail(e),
                TableError::Other(e) => e,
            })?;
            tables.push(TableSummary {
                name: table.name.clone(),
                rows,
            });
        }

        conn.close().map_err(|(_, e)| fail(e))?;

        Ok(BuildSummary {
            path: path.to_path_buf(),
            seed: generator.seed(),
            tables,
        })
    }
}

/// Build `spec` at `path` with default options.
pub fn build(
    path: &Path,
    spec: &FixtureSpec,
    generator: &mut SeededGenerator,
) -> Result<BuildSummary> {
    DatabaseBuilder::default().build(path, spec, generator)
}

enum TableError {
    Sql(rusqlite::Error),
    Other(ParityError),
}

impl From<rusqlite::Error> for TableError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Sql(e)
    }
}

impl From<ParityError> for TableError {
    fn from(e: ParityError) -> Self {
        Self::Other(e)
    }
}

/// Create one table and insert its rows in a single transaction.
fn write_table(
    conn: &mut Connection,
    table: &TableSpec,
    generator: &mut SeededGenerator,
) -> std::result::Result<u64, TableError> {
    let tx = conn.transaction()?;
    tx.execute(&create_table_sql(table), [])?;

    let mut written = 0u64;
    match &table.rows {
        RowSource::Literal(rows) => {
            let full_sql = insert_sql(table, table.columns.iter());
            let partial_sql = insert_sql(table, table.value_columns());
            for row in rows {
                let sql = if row.len() == table.columns.len() {
                    &full_sql
                } else {
                    &partial_sql
                };
                let mut stmt = tx.prepare_cached(sql)?;
                stmt.execute(params_from_iter(row.iter().map(to_sql)))?;
                written += 1;
            }
        }
        RowSource::Generated { count, rules } => {
            let mut stmt = tx.prepare(&insert_sql(table, table.value_columns()))?;
            let mut values = Vec::with_capacity(rules.len());
            for i in 0..*count {
                values.clear();
                for rule in rules {
                    values.push(to_sql(&rule.generate(i, generator)?));
                }
                stmt.execute(params_from_iter(values.iter()))?;
                written += 1;
            }
        }
        RowSource::IndexDerived { count, encoding } => {
            let mut stmt = tx.prepare(&insert_sql(table, table.value_columns()))?;
            for i in 0..*count {
                stmt.execute([encoding.encode(i)])?;
                written += 1;
            }
        }
    }

    tx.commit()?;
    debug!(table = %table.name, rows = written, "table written");
    Ok(written)
}

fn create_table_sql(table: &TableSpec) -> String {
    let columns: Vec<String> = table.columns.iter().map(ColumnSpec::definition).collect();
    format!(
        "CREATE TABLE IF NOT EXISTS \"{}\" ({})",
        table.name,
        columns.join(", ")
    )
}

fn insert_sql<'a>(table: &TableSpec, columns: impl Iterator<Item = &'a ColumnSpec>) -> String {
    let names: Vec<String> = columns.map(|c| format!("\"{}\"", c.name)).collect();
    let placeholders = vec!["?"; names.len()].join(", ");
    format!(
        "INSERT INTO \"{}\" ({}) VALUES ({placeholders})",
        table.name,
        names.join(", ")
    )
}

fn to_sql(value: &Value) -> rusqlite::types::Value {
    use rusqlite::types::Value as Sql;
    match value {
        Value::Null => Sql::Null,
        Value::Integer(i) => Sql::Integer(*i),
        Value::Real(r) => Sql::Real(*r),
        Value::Text(s) => Sql::Text(s.clone()),
        Value::Blob(b) => Sql::Blob(b.clone()),
    }
}

/// Remove a fixture and its sidecar files. Missing files are not an error.
pub fn remove_fixture(path: &Path) -> Result<()> {
    remove_if_exists(path)?;
    for suffix in SIDECAR_SUFFIXES {
        let mut sidecar = path.as_os_str().to_owned();
        sidecar.push(suffix);
        remove_if_exists(Path::new(&sidecar))?;
    }
    Ok(())
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{ColumnRule, IndexEncoding};

    fn users_spec() -> FixtureSpec {
        FixtureSpec::new().table(
            TableSpec::new("users")
                .column(ColumnSpec::primary_key("id"))
                .column(ColumnSpec::text("username"))
                .rows(RowSource::literal([["alice"], ["bob"]])),
        )
    }

    fn query_pairs(path: &Path, sql: &str) -> Vec<(i64, String)> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY).unwrap();
        let mut stmt = conn.prepare(sql).unwrap();
        stmt.query_map([], |r| Ok((r.get(0)?, r.get(1)?)))
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn literal_rows_get_sequential_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.db");
        let summary = build(&path, &users_spec(), &mut SeededGenerator::new(0)).unwrap();

        assert_eq!(summary.tables, vec![TableSummary { name: "users".into(), rows: 2 }]);
        assert_eq!(
            query_pairs(&path, "SELECT id, username FROM users ORDER BY id"),
            vec![(1, "alice".to_owned()), (2, "bob".to_owned())]
        );
    }

    #[test]
    fn rebuild_replaces_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.db");
        build(&path, &users_spec(), &mut SeededGenerator::new(0)).unwrap();

        let other = FixtureSpec::new().table(
            TableSpec::new("products")
                .column(ColumnSpec::primary_key("id"))
                .column(ColumnSpec::text("name"))
                .rows(RowSource::literal([["hat"]])),
        );
        build(&path, &other, &mut SeededGenerator::new(0)).unwrap();

        let conn = Connection::open(&path).unwrap();
        let names: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap()
            .query_map([], |r| r.get(0))
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        assert_eq!(names, vec!["products".to_owned()]);
    }

    #[test]
    fn invalid_spec_leaves_existing_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.db");
        std::fs::write(&path, b"sentinel").unwrap();

        let bad = FixtureSpec::new().table(TableSpec::new("empty"));
        let err = build(&path, &bad, &mut SeededGenerator::new(0)).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(std::fs::read(&path).unwrap(), b"sentinel");
    }

    #[test]
    fn write_failure_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.db");

        // More columns than any SQLite build allows fails at CREATE TABLE,
        // after the first table is already committed.
        let wide = (0..33_000).fold(TableSpec::new("wide"), |t, i| {
            t.column(ColumnSpec::integer(format!("c{i}")))
        });
        let spec = FixtureSpec::new()
            .table(
                TableSpec::new("ok")
                    .column(ColumnSpec::integer("x"))
                    .rows(RowSource::literal([[1]])),
            )
            .table(wide);
        let err = build(&path, &spec, &mut SeededGenerator::new(0)).unwrap_err();
        assert!(matches!(err, ParityError::WriteFailure { .. }), "{err}");
        assert!(!path.exists());
        assert!(!dir.path().join("fixture.db-journal").exists());
    }

    #[test]
    fn generated_rows_follow_rules() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gen.db");
        let spec = FixtureSpec::new().table(
            TableSpec::new("people")
                .column(ColumnSpec::primary_key("id"))
                .column(ColumnSpec::text("name"))
                .column(ColumnSpec::integer("age"))
                .column(ColumnSpec::blob("avatar"))
                .rows(RowSource::Generated {
                    count: 500,
                    rules: vec![
                        ColumnRule::FirstName,
                        ColumnRule::IntRange { min: 1, max: 100 },
                        ColumnRule::Binary { len: 8 },
                    ],
                }),
        );
        let mut generator = SeededGenerator::new(7);
        build(&path, &spec, &mut generator).unwrap();
        assert_eq!(generator.calls(), 1500);

        let conn = Connection::open(&path).unwrap();
        let (count, min_age, max_age, blob_len): (i64, i64, i64, i64) = conn
            .query_row(
                "SELECT count(*), min(age), max(age), max(length(avatar)) FROM people",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
            )
            .unwrap();
        assert_eq!(count, 500);
        assert!(min_age >= 1 && max_age <= 100);
        assert_eq!(blob_len, 8);
        let kinds: i64 = conn
            .query_row(
                "SELECT count(*) FROM people WHERE typeof(avatar) = 'blob'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(kinds, 500);
    }

    #[test]
    fn index_derived_blobs_match_their_ordinal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blobs.db");
        let spec = FixtureSpec::new().table(
            TableSpec::new("blobs")
                .column(ColumnSpec::primary_key("id"))
                .column(ColumnSpec::blob("data"))
                .rows(RowSource::IndexDerived {
                    count: 300,
                    encoding: IndexEncoding::TwoByte,
                }),
        );
        let mut generator = SeededGenerator::new(1);
        build(&path, &spec, &mut generator).unwrap();
        assert_eq!(generator.calls(), 0, "index-derived rows never touch the generator");

        let conn = Connection::open(&path).unwrap();
        let mut stmt = conn.prepare("SELECT id, data FROM blobs ORDER BY id").unwrap();
        let rows: Vec<(i64, Vec<u8>)> = stmt
            .query_map([], |r| Ok((r.get(0)?, r.get(1)?)))
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        assert_eq!(rows.len(), 300);
        for (i, (id, data)) in rows.iter().enumerate() {
            assert_eq!(*id, i as i64 + 1);
            assert_eq!(data, &(i as u16).to_be_bytes().to_vec());
        }
    }

    #[test]
    fn options_are_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.db");
        let builder = DatabaseBuilder::new(BuildOptions {
            page_size: 1000,
            ..BuildOptions::default()
        });
        assert!(builder.build(&path, &users_spec(), &mut SeededGenerator::new(0)).is_err());

        for mode in ["wal", "truncate", "PERSIST", "memory"] {
            let builder = DatabaseBuilder::new(BuildOptions {
                journal_mode: mode.into(),
                ..BuildOptions::default()
            });
            let err = builder
                .build(&path, &users_spec(), &mut SeededGenerator::new(0))
                .unwrap_err();
            assert!(err.is_invalid_argument(), "{mode}: {err}");
        }
    }

    #[test]
    fn allowed_journal_modes_leave_no_sidecars() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("j.db");
        for mode in ["delete", "OFF"] {
            let builder = DatabaseBuilder::new(BuildOptions {
                journal_mode: mode.into(),
                ..BuildOptions::default()
            });
            builder.build(&path, &users_spec(), &mut SeededGenerator::new(0)).unwrap();
            let entries: Vec<_> = std::fs::read_dir(dir.path())
                .unwrap()
                .map(|e| e.unwrap().file_name())
                .collect();
            assert_eq!(entries, vec![std::ffi::OsString::from("j.db")], "{mode}");
        }
    }

    #[test]
    fn page_size_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.db");
        let builder = DatabaseBuilder::new(BuildOptions {
            page_size: 8192,
            ..BuildOptions::default()
        });
        builder.build(&path, &users_spec(), &mut SeededGenerator::new(0)).unwrap();
        let conn = Connection::open(&path).unwrap();
        let page_size: i64 = conn.query_row("PRAGMA page_size", [], |r| r.get(0)).unwrap();
        assert_eq!(page_size, 8192);
    }
}
