//! Cross-driver parity checks.
//!
//! A [`ParityRunner`] executes each [`QueryCase`] through a reference
//! [`Driver`] and a driver under test, then compares the returned rows cell
//! by cell, including the storage class of every value. Each query yields
//! one [`ParityVerdict`]; a failing query never stops the run.

pub mod comparator;
pub mod driver;
pub mod logging;
pub mod report;
pub mod runner;
pub mod rusqlite_driver;
pub mod shell_driver;
pub mod suite;

pub use comparator::{Mismatch, compare};
pub use driver::{BufferedCursor, Driver, DriverConnection, DriverCursor};
pub use report::{ParityReport, REPORT_SCHEMA_V1, ReportSummary};
pub use runner::{FetchMode, ParityOutcome, ParityRunner, ParityVerdict, QueryCase};
pub use rusqlite_driver::RusqliteDriver;
pub use shell_driver::{ShellDriver, ShellDriverConfig};
