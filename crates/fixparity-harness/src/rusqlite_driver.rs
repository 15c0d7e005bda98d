//! Reference driver backed by the bundled C SQLite library via rusqlite.

use std::path::Path;

use fixparity_error::{ParityError, Result};
use fixparity_types::{Row, Value};
use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::driver::{BufferedCursor, Driver, DriverConnection, DriverCursor};

/// Reference driver. Opens fixtures read-only.
#[derive(Debug, Clone)]
pub struct RusqliteDriver {
    name: String,
}

impl RusqliteDriver {
    pub const NAME: &'static str = "rusqlite";

    pub fn new() -> Self {
        Self {
            name: Self::NAME.to_owned(),
        }
    }

    /// Same driver under another name, for runs that compare rusqlite with
    /// itself or need to tell two instances apart.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for RusqliteDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for RusqliteDriver {
    fn name(&self) -> &str {
        &self.name
    }

    fn connect(&self, fixture: &Path) -> Result<Box<dyn DriverConnection>> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(fixture, flags)
            .map_err(|e| ParityError::fetch(&self.name, format!("{}: {e}", fixture.display())))?;
        debug!(driver = %self.name, fixture = %fixture.display(), "connected");
        Ok(Box::new(RusqliteConnection {
            name: self.name.clone(),
            conn,
        }))
    }
}

struct RusqliteConnection {
    name: String,
    conn: Connection,
}

impl RusqliteConnection {
    fn query(&self, sql: &str) -> rusqlite::Result<Vec<Row>> {
        let mut stmt = self.conn.prepare(sql.trim())?;
        let col_count = stmt.column_count();
        let rows = stmt.query_map([], |row| {
            (0..col_count)
                .map(|i| row.get::<_, rusqlite::types::Value>(i).map(from_sqlite))
                .collect::<rusqlite::Result<Row>>()
        })?;
        rows.collect()
    }
}

impl DriverConnection for RusqliteConnection {
    fn execute(&mut self, sql: &str) -> Result<Box<dyn DriverCursor>> {
        let rows = self
            .query(sql)
            .map_err(|e| ParityError::fetch(&self.name, e))?;
        debug!(driver = %self.name, rows = rows.len(), "statement executed");
        Ok(Box::new(BufferedCursor::new(rows)))
    }
}

fn from_sqlite(v: rusqlite::types::Value) -> Value {
    match v {
        rusqlite::types::Value::Null => Value::Null,
        rusqlite::types::Value::Integer(i) => Value::Integer(i),
        rusqlite::types::Value::Real(f) => Value::Real(f),
        rusqlite::types::Value::Text(s) => Value::Text(s),
        rusqlite::types::Value::Blob(b) => Value::Blob(b),
    }
}
