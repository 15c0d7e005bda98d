//! Cell values, rows and declared column types.
//!
//! Fixture specs declare columns with a [`SemanticType`]; drivers surface
//! result cells as [`Value`]s whose [`ValueKind`] is the runtime type the
//! comparator checks.

pub mod row;
pub mod value;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use row::Row;
pub use value::{Value, ValueKind};

/// Logical column type, independent of how the engine stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    Integer,
    Text,
    Blob,
    Real,
}

impl SemanticType {
    /// Declared type used in `CREATE TABLE`.
    pub const fn sql_type(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Text => "TEXT",
            Self::Blob => "BLOB",
            Self::Real => "REAL",
        }
    }

    /// The value kind a column of this type is expected to hold.
    pub const fn value_kind(self) -> ValueKind {
        match self {
            Self::Integer => ValueKind::Integer,
            Self::Text => ValueKind::Text,
            Self::Blob => ValueKind::Blob,
            Self::Real => ValueKind::Real,
        }
    }

    /// Whether a literal of `kind` may be stored in a column of this type.
    ///
    /// NULL fits anywhere; REAL columns also take integers (the engine
    /// converts them on insert).
    pub const fn accepts(self, kind: ValueKind) -> bool {
        matches!(
            (self, kind),
            (_, ValueKind::Null)
                | (Self::Integer, ValueKind::Integer)
                | (Self::Text, ValueKind::Text)
                | (Self::Blob, ValueKind::Blob)
                | (Self::Real, ValueKind::Real | ValueKind::Integer)
        )
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_type())
    }
}
