//! Deterministic SQLite fixtures.
//!
//! A [`FixtureSpec`] describes tables and where their rows come from; a
//! [`DatabaseBuilder`] writes it to a fresh file, drawing synthetic values
//! from a [`SeededGenerator`]. The same spec and seed produce the same bytes.

pub mod builder;
pub mod determinism;
pub mod generator;
pub mod presets;
pub mod spec;
mod vocab;

pub use builder::{BuildOptions, BuildSummary, DatabaseBuilder, TableSummary, build, remove_fixture};
pub use determinism::{DeterminismReport, fixture_sha256, verify_determinism};
pub use generator::{MAX_BINARY_LEN, MIN_TEXT_CHARS, SeededGenerator};
pub use spec::{ColumnRule, ColumnSpec, FixtureSpec, IndexEncoding, RowSource, TableSpec};
