//! Declarative fixture description: tables, columns and row sources.
//!
//! Specs are plain values built in code. [`FixtureSpec::validate`] runs
//! every structural check up front so a build never starts on a spec that
//! would fail halfway through.

use std::collections::HashSet;
use std::fmt;

use fixparity_error::{ParityError, Result};
use fixparity_types::{SemanticType, Value, ValueKind};

use crate::generator::{MAX_BINARY_LEN, MIN_TEXT_CHARS, SeededGenerator};

/// Ordered set of tables making up one fixture file.
#[derive(Debug, Clone, Default)]
pub struct FixtureSpec {
    pub tables: Vec<TableSpec>,
}

impl FixtureSpec {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn table(mut self, table: TableSpec) -> Self {
        self.tables.push(table);
        self
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.name.as_str())
    }

    /// Check every invariant the builder relies on.
    pub fn validate(&self) -> Result<()> {
        if self.tables.is_empty() {
            return Err(ParityError::invalid("fixture spec declares no tables"));
        }
        let mut seen = HashSet::new();
        for table in &self.tables {
            table.validate()?;
            // SQLite identifiers are case-insensitive.
            if !seen.insert(table.name.to_ascii_lowercase()) {
                return Err(ParityError::invalid(format!(
                    "duplicate table name `{}`",
                    table.name
                )));
            }
        }
        Ok(())
    }
}

/// One table: columns in declaration order plus where its rows come from.
#[derive(Debug, Clone)]
pub struct TableSpec {
    pub name: String,
    pub columns: Vec<ColumnSpec>,
    pub rows: RowSource,
}

impl TableSpec {
    /// A table with no columns and no rows; add both before building.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: RowSource::Literal(Vec::new()),
        }
    }

    #[must_use]
    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    #[must_use]
    pub fn rows(mut self, rows: RowSource) -> Self {
        self.rows = rows;
        self
    }

    pub fn primary_key(&self) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.primary_key)
    }

    /// Columns that receive values on insert when the key is auto-assigned.
    pub fn value_columns(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter().filter(|c| !c.primary_key)
    }

    /// Number of rows the row source will produce.
    pub fn row_count(&self) -> u64 {
        match &self.rows {
            RowSource::Literal(rows) => rows.len() as u64,
            RowSource::Generated { count, .. } | RowSource::IndexDerived { count, .. } => *count,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_identifier("table", &self.name)?;
        if self.columns.is_empty() {
            return Err(ParityError::invalid(format!(
                "table `{}` declares no columns",
                self.name
            )));
        }

        let mut names = HashSet::new();
        let mut keys = 0usize;
        for column in &self.columns {
            check_identifier("column", &column.name)?;
            if !names.insert(column.name.to_ascii_lowercase()) {
                return Err(ParityError::invalid(format!(
                    "table `{}` declares column `{}` twice",
                    self.name, column.name
                )));
            }
            if column.primary_key {
                keys += 1;
                if column.ty != SemanticType::Integer {
                    return Err(ParityError::invalid(format!(
                        "primary key `{}.{}` must be INTEGER, not {}",
                        self.name, column.name, column.ty
                    )));
                }
            }
        }
        if keys > 1 {
            return Err(ParityError::invalid(format!(
                "table `{}` declares {keys} primary keys",
                self.name
            )));
        }

        match &self.rows {
            RowSource::Literal(rows) => self.validate_literal(rows),
            RowSource::Generated { rules, .. } => self.validate_generated(rules),
            RowSource::IndexDerived { count, encoding } => {
                self.validate_index_derived(*count, encoding)
            }
        }
    }

    fn validate_literal(&self, rows: &[Vec<Value>]) -> Result<()> {
        let full = self.columns.len();
        let without_key = self.value_columns().count();
        let key_index = self.columns.iter().position(|c| c.primary_key);
        let mut keys = RowidTracker::default();

        for (i, row) in rows.iter().enumerate() {
            let columns: Vec<&ColumnSpec> = if row.len() == full {
                self.columns.iter().collect()
            } else if key_index.is_some() && row.len() == without_key {
                self.value_columns().collect()
            } else {
                return Err(ParityError::invalid(format!(
                    "table `{}` row {i} has {} values, expected {full}{}",
                    self.name,
                    row.len(),
                    if key_index.is_some() {
                        format!(" or {without_key}")
                    } else {
                        String::new()
                    }
                )));
            };

            for (column, value) in columns.iter().zip(row) {
                check_value(&self.name, column, value)?;
            }

            let Some(k) = key_index else { continue };
            // A NULL key, like an omitted one, is assigned by the engine.
            let explicit = match row.get(k) {
                Some(Value::Integer(key)) if row.len() == full => Some(*key),
                _ => None,
            };
            keys.insert(explicit).map_err(|clash| {
                ParityError::invalid(match clash {
                    KeyClash::Repeated(key) => format!(
                        "table `{}` repeats primary key {key} at row {i}",
                        self.name
                    ),
                    KeyClash::Exhausted => format!(
                        "table `{}` row {i} needs an assigned key past {}",
                        self.name,
                        i64::MAX
                    ),
                })
            })?;
        }
        Ok(())
    }

    fn validate_generated(&self, rules: &[ColumnRule]) -> Result<()> {
        let columns: Vec<&ColumnSpec> = self.value_columns().collect();
        if rules.len() != columns.len() {
            return Err(ParityError::invalid(format!(
                "table `{}` has {} generated columns but {} rules",
                self.name,
                columns.len(),
                rules.len()
            )));
        }
        for (column, rule) in columns.iter().zip(rules) {
            rule.validate()?;
            if column.not_null && rule.can_be_null() {
                return Err(ParityError::invalid(format!(
                    "rule {rule} can produce NULL for NOT NULL column `{}.{}`",
                    self.name, column.name
                )));
            }
            if !rule.fits(column.ty) {
                return Err(ParityError::invalid(format!(
                    "rule {rule} produces {} values, column `{}.{}` is {}",
                    rule.kind(),
                    self.name,
                    column.name,
                    column.ty
                )));
            }
        }
        Ok(())
    }

    fn validate_index_derived(&self, count: u64, encoding: &IndexEncoding) -> Result<()> {
        let columns: Vec<&ColumnSpec> = self.value_columns().collect();
        let [column] = columns.as_slice() else {
            return Err(ParityError::invalid(format!(
                "index-derived table `{}` needs exactly one non-key column, has {}",
                self.name,
                columns.len()
            )));
        };
        if column.ty != SemanticType::Blob {
            return Err(ParityError::invalid(format!(
                "index-derived column `{}.{}` must be BLOB, not {}",
                self.name, column.name, column.ty
            )));
        }
        if let Some(limit) = encoding.capacity() {
            if count > limit {
                return Err(ParityError::invalid(format!(
                    "table `{}` wants {count} rows but {encoding:?} encodes only {limit}",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

/// One column declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    pub ty: SemanticType,
    pub primary_key: bool,
    pub not_null: bool,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, ty: SemanticType) -> Self {
        Self {
            name: name.into(),
            ty,
            primary_key: false,
            not_null: false,
        }
    }

    /// `INTEGER PRIMARY KEY` column (a rowid alias, auto-assigned 1..n).
    pub fn primary_key(name: impl Into<String>) -> Self {
        Self {
            primary_key: true,
            ..Self::new(name, SemanticType::Integer)
        }
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::Integer)
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::Text)
    }

    pub fn blob(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::Blob)
    }

    pub fn real(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::Real)
    }

    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Column definition as written inside `CREATE TABLE`.
    pub fn definition(&self) -> String {
        let mut def = format!("\"{}\" {}", self.name, self.ty.sql_type());
        if self.primary_key {
            def.push_str(" PRIMARY KEY");
        }
        if self.not_null {
            def.push_str(" NOT NULL");
        }
        def
    }
}

/// Where a table's rows come from.
#[derive(Debug, Clone)]
pub enum RowSource {
    /// Tuples inserted verbatim in list order. A tuple may omit the primary
    /// key column, in which case the engine assigns it.
    Literal(Vec<Vec<Value>>),
    /// `count` rows, one [`ColumnRule`] per non-key column in column order.
    Generated { count: u64, rules: Vec<ColumnRule> },
    /// `count` rows whose single blob column is a pure function of the
    /// zero-based row index. Independent of any seed.
    IndexDerived { count: u64, encoding: IndexEncoding },
}

impl RowSource {
    /// Literal rows from anything convertible into cell values.
    pub fn literal<R, V>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Literal(
            rows.into_iter()
                .map(|r| r.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}

/// How row index `i` becomes blob bytes.
#[derive(Clone, Copy)]
pub enum IndexEncoding {
    /// `i` as one big-endian byte; at most 256 rows.
    OneByte,
    /// `i` as two big-endian bytes; at most 65 536 rows.
    TwoByte,
    /// Caller-supplied pure function of the index.
    Custom(fn(u64) -> Vec<u8>),
}

impl IndexEncoding {
    pub fn encode(&self, index: u64) -> Vec<u8> {
        match self {
            Self::OneByte => vec![(index & 0xFF) as u8],
            Self::TwoByte => ((index & 0xFFFF) as u16).to_be_bytes().to_vec(),
            Self::Custom(f) => f(index),
        }
    }

    /// Number of distinct indices representable, if bounded.
    pub const fn capacity(&self) -> Option<u64> {
        match self {
            Self::OneByte => Some(1 << 8),
            Self::TwoByte => Some(1 << 16),
            Self::Custom(_) => None,
        }
    }
}

impl fmt::Debug for IndexEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneByte => f.write_str("OneByte"),
            Self::TwoByte => f.write_str("TwoByte"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Per-column value rule for [`RowSource::Generated`].
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnRule {
    ShortText,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    StreetAddress,
    City,
    StateAbbr,
    Zipcode,
    /// Sentence text of at most `max_chars` characters.
    Text { max_chars: usize },
    /// Sentence text stored as its UTF-8 bytes in a blob column.
    TextBytes { max_chars: usize },
    Binary { len: usize },
    IntRange { min: i64, max: i64 },
    RealRange { min: f64, max: f64 },
    /// Same value in every row; does not touch the generator.
    Constant(Value),
    /// `values[i % len]` for row `i`; does not touch the generator.
    Cycle(Vec<Value>),
}

impl ColumnRule {
    /// Kind of value this rule produces.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::ShortText
            | Self::FirstName
            | Self::LastName
            | Self::Email
            | Self::PhoneNumber
            | Self::StreetAddress
            | Self::City
            | Self::StateAbbr
            | Self::Zipcode
            | Self::Text { .. } => ValueKind::Text,
            Self::TextBytes { .. } | Self::Binary { .. } => ValueKind::Blob,
            Self::IntRange { .. } => ValueKind::Integer,
            Self::RealRange { .. } => ValueKind::Real,
            Self::Constant(v) => v.kind(),
            Self::Cycle(values) => values
                .iter()
                .map(Value::kind)
                .find(|k| *k != ValueKind::Null)
                .unwrap_or(ValueKind::Null),
        }
    }

    pub fn can_be_null(&self) -> bool {
        match self {
            Self::Constant(v) => v.is_null(),
            Self::Cycle(values) => values.iter().any(Value::is_null),
            _ => false,
        }
    }

    /// Whether every value this rule can produce fits a column of `ty`.
    pub fn fits(&self, ty: SemanticType) -> bool {
        match self {
            Self::Cycle(values) => values.iter().all(|v| ty.accepts(v.kind())),
            other => ty.accepts(other.kind()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Self::Cycle(values) = self {
            if values.is_empty() {
                return Err(ParityError::invalid("cycle rule needs at least one value"));
            }
            return Ok(());
        }
        match *self {
            Self::Text { max_chars } | Self::TextBytes { max_chars }
                if max_chars < MIN_TEXT_CHARS =>
            {
                Err(ParityError::invalid(format!(
                    "rule {self} needs max_chars >= {MIN_TEXT_CHARS}"
                )))
            }
            Self::Binary { len } if len > MAX_BINARY_LEN => Err(ParityError::invalid(format!(
                "rule {self} exceeds maximum blob length {MAX_BINARY_LEN}"
            ))),
            Self::IntRange { min, max } if min > max => {
                Err(ParityError::invalid(format!("rule {self} has an empty range")))
            }
            Self::RealRange { min, max } if !(min.is_finite() && max.is_finite() && min <= max) => {
                Err(ParityError::invalid(format!("rule {self} has an invalid range")))
            }
            _ => Ok(()),
        }
    }

    /// Produce the value for zero-based row `index`, advancing `generator`
    /// at most once.
    pub fn generate(&self, index: u64, generator: &mut SeededGenerator) -> Result<Value> {
        Ok(match self {
            Self::ShortText => Value::Text(generator.next_short_text()),
            Self::FirstName => Value::Text(generator.first_name()),
            Self::LastName => Value::Text(generator.last_name()),
            Self::Email => Value::Text(generator.email()),
            Self::PhoneNumber => Value::Text(generator.phone_number()),
            Self::StreetAddress => Value::Text(generator.street_address()),
            Self::City => Value::Text(generator.city()),
            Self::StateAbbr => Value::Text(generator.state_abbr()),
            Self::Zipcode => Value::Text(generator.zipcode()),
            Self::Text { max_chars } => Value::Text(generator.text(*max_chars)?),
            Self::TextBytes { max_chars } => Value::Blob(generator.text(*max_chars)?.into_bytes()),
            Self::Binary { len } => Value::Blob(generator.next_binary(*len)?),
            Self::IntRange { min, max } => Value::Integer(generator.next_int_in_range(*min, *max)?),
            Self::RealRange { min, max } => Value::Real(generator.next_real_in_range(*min, *max)?),
            Self::Constant(v) => v.clone(),
            Self::Cycle(values) => {
                let len = values.len() as u64;
                if len == 0 {
                    return Err(ParityError::invalid("cycle rule needs at least one value"));
                }
                values[(index % len) as usize].clone()
            }
        })
    }
}

impl fmt::Display for ColumnRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { max_chars } => write!(f, "text({max_chars})"),
            Self::TextBytes { max_chars } => write!(f, "text_bytes({max_chars})"),
            Self::Binary { len } => write!(f, "binary({len})"),
            Self::IntRange { min, max } => write!(f, "int({min}..={max})"),
            Self::RealRange { min, max } => write!(f, "real({min}..={max})"),
            Self::Constant(v) => write!(f, "constant({v})"),
            Self::Cycle(values) => write!(f, "cycle({} values)", values.len()),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Rowids an `INTEGER PRIMARY KEY` table will hold after each literal
/// insert. An engine-assigned key is one past the largest key so far, or 1
/// in an empty table.
#[derive(Default)]
struct RowidTracker {
    used: HashSet<i64>,
    max: Option<i64>,
}

enum KeyClash {
    Repeated(i64),
    /// Past i64::MAX the engine picks a random free rowid.
    Exhausted,
}

impl RowidTracker {
    /// Record one insert. `None` means the engine assigns the key.
    fn insert(&mut self, explicit: Option<i64>) -> std::result::Result<(), KeyClash> {
        let key = match (explicit, self.max) {
            (Some(key), _) => key,
            (None, None) => 1,
            (None, Some(max)) => max.checked_add(1).ok_or(KeyClash::Exhausted)?,
        };
        if !self.used.insert(key) {
            return Err(KeyClash::Repeated(key));
        }
        self.max = Some(self.max.map_or(key, |max| max.max(key)));
        Ok(())
    }
}

fn check_identifier(what: &str, name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ParityError::invalid(format!(
            "{what} name {name:?} must match [A-Za-z_][A-Za-z0-9_]*"
        )));
    }
    if name.to_ascii_lowercase().starts_with("sqlite_") {
        return Err(ParityError::invalid(format!(
            "{what} name {name:?} uses the reserved sqlite_ prefix"
        )));
    }
    Ok(())
}

fn check_value(table: &str, column: &ColumnSpec, value: &Value) -> Result<()> {
    if !column.ty.accepts(value.kind()) {
        return Err(ParityError::invalid(format!(
            "value {value} ({}) does not fit column `{table}.{}` of type {}",
            value.kind(),
            column.name,
            column.ty
        )));
    }
    if column.not_null && value.is_null() {
        return Err(ParityError::invalid(format!(
            "NULL given for NOT NULL column `{table}.{}`",
            column.name
        )));
    }
    Ok(())
}
