//! Fixture digests and the same-seed reproducibility check.
//!
//! Reproducible means byte-identical: two builds of one spec from one seed
//! must hash the same over their raw file bytes.

use std::path::Path;

use fixparity_error::Result;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

use crate::builder::DatabaseBuilder;
use crate::generator::SeededGenerator;
use crate::spec::FixtureSpec;

/// SHA-256 hex digest of the raw fixture bytes.
pub fn fixture_sha256(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(sha256_hex(&bytes))
}

/// Outcome of building one spec twice from the same seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeterminismReport {
    pub seed: u64,
    pub first_sha256: String,
    pub second_sha256: String,
    pub size_bytes: u64,
    /// Byte offset of the first difference, when the files differ.
    pub first_difference: Option<u64>,
}

impl DeterminismReport {
    pub fn is_deterministic(&self) -> bool {
        self.first_difference.is_none() && self.first_sha256 == self.second_sha256
    }
}

/// Build `spec` twice into a scratch directory, each time from a fresh
/// generator seeded with `seed`, and compare the raw bytes.
pub fn verify_determinism(
    builder: &DatabaseBuilder,
    spec: &FixtureSpec,
    seed: u64,
) -> Result<DeterminismReport> {
    let tmp_dir = tempfile::TempDir::new()?;
    let first = tmp_dir.path().join("first.db");
    let second = tmp_dir.path().join("second.db");

    builder.build(&first, spec, &mut SeededGenerator::new(seed))?;
    builder.build(&second, spec, &mut SeededGenerator::new(seed))?;

    let a = std::fs::read(&first)?;
    let b = std::fs::read(&second)?;
    let report = DeterminismReport {
        seed,
        first_sha256: sha256_hex(&a),
        second_sha256: sha256_hex(&b),
        size_bytes: a.len() as u64,
        first_difference: first_difference(&a, &b),
    };
    info!(
        seed,
        deterministic = report.is_deterministic(),
        sha256 = %report.first_sha256,
        "fixture determinism checked"
    );
    Ok(report)
}

fn first_difference(a: &[u8], b: &[u8]) -> Option<u64> {
    a.iter()
        .zip(b)
        .position(|(x, y)| x != y)
        .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))
        .map(|offset| offset as u64)
}

fn sha256_hex(data: &[u8]) -> String {
    use std::fmt::Write as _;
    let digest = Sha256::digest(data);
    let mut hex = String::with_capacity(64);
    for byte in digest {
        let _ = write!(hex, "{byte:02x}");
    }
    hex
}
