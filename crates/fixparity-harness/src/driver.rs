//! Driver abstraction.
//!
//! A driver opens a fixture, executes one statement per cursor, and hands
//! rows back as typed [`Row`]s. Both sides of a parity run implement the
//! same three traits, so any further driver plugs in the same way.

use std::collections::VecDeque;
use std::path::Path;

use fixparity_error::Result;
use fixparity_types::Row;

/// A database driver that can open fixture files.
pub trait Driver {
    /// Short identifier used in verdicts, logs, and error attribution.
    fn name(&self) -> &str;

    /// Open `fixture` for reading.
    ///
    /// # Errors
    ///
    /// Returns `ParityError::FetchFailure` if the fixture cannot be opened.
    fn connect(&self, fixture: &Path) -> Result<Box<dyn DriverConnection>>;
}

impl<D: Driver + ?Sized> Driver for Box<D> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn connect(&self, fixture: &Path) -> Result<Box<dyn DriverConnection>> {
        (**self).connect(fixture)
    }
}

/// An open connection to a fixture.
pub trait DriverConnection {
    /// Execute one statement and return a cursor positioned before the
    /// first row.
    ///
    /// # Errors
    ///
    /// Returns `ParityError::FetchFailure` if the statement fails.
    fn execute(&mut self, sql: &str) -> Result<Box<dyn DriverCursor>>;
}

/// Forward-only cursor over a statement's result rows.
pub trait DriverCursor {
    /// Next row, or `None` once the result set is exhausted. Calling again
    /// after exhaustion keeps returning `None`.
    fn fetch_one(&mut self) -> Result<Option<Row>>;

    /// Every remaining row from the current position, in order.
    fn fetch_all(&mut self) -> Result<Vec<Row>> {
        let mut rows = Vec::new();
        while let Some(row) = self.fetch_one()? {
            rows.push(row);
        }
        Ok(rows)
    }
}

/// Cursor over rows that were materialized when the statement ran.
///
/// Both bundled drivers step their statement to completion inside
/// `execute`, so errors surface there and the cursor itself cannot fail.
#[derive(Debug, Clone, Default)]
pub struct BufferedCursor {
    rows: VecDeque<Row>,
}

impl BufferedCursor {
    pub fn new(rows: impl IntoIterator<Item = Row>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    /// Rows not yet fetched.
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl DriverCursor for BufferedCursor {
    fn fetch_one(&mut self) -> Result<Option<Row>> {
        Ok(self.rows.pop_front())
    }

    fn fetch_all(&mut self) -> Result<Vec<Row>> {
        Ok(self.rows.drain(..).collect())
    }
}
