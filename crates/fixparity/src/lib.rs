//! Deterministic SQLite fixtures and cross-driver parity checks.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use fixparity::fixture::{SeededGenerator, build, presets};
//! use fixparity::harness::{ParityRunner, RusqliteDriver, ShellDriver, suite};
//!
//! # fn main() -> fixparity::Result<()> {
//! let path = Path::new("driver-tests.db");
//! build(path, &presets::driver_tests(), &mut SeededGenerator::new(presets::DEFAULT_SEED))?;
//!
//! let runner = ParityRunner::new(RusqliteDriver::new(), ShellDriver::default());
//! let report = runner.run_report(path, &suite::driver_queries());
//! assert!(report.is_clean());
//! # Ok(())
//! # }
//! ```

pub use fixparity_error::{ParityError, Result};
pub use fixparity_fixture as fixture;
pub use fixparity_harness as harness;
pub use fixparity_types::{Row, SemanticType, Value, ValueKind, row};

pub use fixparity_fixture::{DatabaseBuilder, FixtureSpec, SeededGenerator};
pub use fixparity_harness::{Driver, ParityRunner, ParityVerdict, QueryCase};
