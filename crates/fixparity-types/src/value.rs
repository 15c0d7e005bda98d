use std::fmt;

use serde::{Deserialize, Serialize};

/// A single result or fixture cell.
///
/// Equality is type-aware: `Integer(2)` never equals `Real(2.0)` and a
/// `Blob` never equals a `Text` holding the same bytes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit IEEE 754 floating-point number.
    Real(f64),
    /// A UTF-8 text string.
    Text(String),
    /// A binary large object.
    Blob(Vec<u8>),
}

/// Runtime type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Integer,
    Real,
    Text,
    Blob,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Integer => "integer",
            Self::Real => "real",
            Self::Text => "text",
            Self::Blob => "blob",
        };
        f.write_str(name)
    }
}

impl Value {
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Integer(_) => ValueKind::Integer,
            Self::Real(_) => ValueKind::Real,
            Self::Text(_) => ValueKind::Text,
            Self::Blob(_) => ValueKind::Blob,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub const fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            Self::Blob(b) => Some(b),
            _ => None,
        }
    }

    /// SQL literal form, usable inside generated statements and reports.
    pub fn to_sql_literal(&self) -> String {
        match self {
            Self::Null => "NULL".to_owned(),
            Self::Integer(i) => i.to_string(),
            Self::Real(r) => format_real(*r),
            Self::Text(s) => format!("'{}'", s.replace('\'', "''")),
            Self::Blob(b) => format!("X'{}'", hex_encode(b)),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            // NaN never reaches a fixture (SQLite stores it as NULL), but
            // keep equality reflexive for values built by hand.
            (Self::Real(a), Self::Real(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Blob(a), Self::Blob(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql_literal())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Blob(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::Blob(v.to_vec())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Reals always carry a decimal point or exponent so they never read back
/// as integers.
fn format_real(r: f64) -> String {
    if r.is_nan() {
        return "NULL".to_owned();
    }
    if r.is_infinite() {
        let literal = if r > 0.0 { "1e999" } else { "-1e999" };
        return literal.to_owned();
    }
    let s = format!("{r:?}");
    if s.contains(['.', 'e', 'E']) {
        s
    } else {
        format!("{s}.0")
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    use std::fmt::Write as _;
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02X}");
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_never_equals_real() {
        assert_ne!(Value::Integer(2), Value::Real(2.0));
        assert_eq!(Value::Real(2.0), Value::Real(2.0));
    }

    #[test]
    fn blob_never_equals_text_with_same_bytes() {
        let blob = Value::Blob(b"alice".to_vec());
        let text = Value::Text("alice".to_owned());
        assert_ne!(blob, text);
        assert_eq!(blob.kind(), ValueKind::Blob);
        assert_eq!(text.kind(), ValueKind::Text);
    }

    #[test]
    fn sql_literals() {
        assert_eq!(Value::Null.to_sql_literal(), "NULL");
        assert_eq!(Value::from(42).to_sql_literal(), "42");
        assert_eq!(Value::from(1.0).to_sql_literal(), "1.0");
        assert_eq!(Value::from(2.5e-7).to_sql_literal(), "2.5e-7");
        assert_eq!(Value::from("it's").to_sql_literal(), "'it''s'");
        assert_eq!(Value::from(vec![0x00, 0xAB]).to_sql_literal(), "X'00AB'");
    }

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("bob")), Value::Text("bob".to_owned()));
    }

    #[test]
    fn accessors_are_kind_strict() {
        let v = Value::Integer(7);
        assert_eq!(v.as_integer(), Some(7));
        assert_eq!(v.as_real(), None);
        assert_eq!(Value::Blob(vec![1]).as_blob(), Some(&[1u8][..]));
        assert_eq!(Value::Text("x".into()).as_blob(), None);
    }

    #[test]
    fn serde_keeps_the_tag() {
        let json = serde_json::to_string(&Value::Blob(vec![5])).unwrap();
        assert_eq!(json, r#"{"Blob":[5]}"#);
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Value::Blob(vec![5]));
    }
}
