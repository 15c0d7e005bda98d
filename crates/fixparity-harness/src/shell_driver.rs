//! Driver that runs queries through a sqlite3-compatible command-line shell.
//!
//! Each statement runs in its own shell process with `.mode quote`, which
//! prints every value as an SQL literal: `NULL`, `42`, `1.5`, `'text'`,
//! `X'00ff'`. Parsing those literals keeps the storage class of each cell,
//! so a blob never comes back looking like text.
//!
//! Text holding control characters is wrapped by the shell: older releases
//! print `replace('a\rb','\r',char(13))`, 3.50 and later print
//! `unistr('a\u000db')`. Infinite reals are `9.0e+999` in older releases
//! and `Inf` in newer ones. Both forms of each are accepted.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use fixparity_error::{ParityError, Result};
use fixparity_types::{Row, Value};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::driver::{BufferedCursor, Driver, DriverConnection, DriverCursor};

/// Largest stderr excerpt carried in an error.
const STDERR_SNIPPET_BYTES: usize = 4096;

/// How to launch the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellDriverConfig {
    /// Driver name used in verdicts and errors.
    pub name: String,
    /// Shell executable, looked up on `PATH` when not a path.
    pub binary: String,
    /// Extra arguments placed before the fixture path.
    pub args: Vec<String>,
    /// Pass `-readonly`. Turn off for shells that do not accept the flag.
    pub read_only: bool,
    /// Dot-commands or SQL sent before the output mode is set.
    pub preamble: Vec<String>,
}

impl Default for ShellDriverConfig {
    fn default() -> Self {
        Self {
            name: "sqlite3".to_owned(),
            binary: "sqlite3".to_owned(),
            args: Vec::new(),
            read_only: true,
            preamble: Vec::new(),
        }
    }
}

/// Driver under test backed by an external shell binary.
#[derive(Debug, Clone, Default)]
pub struct ShellDriver {
    config: ShellDriverConfig,
}

impl ShellDriver {
    pub fn new(config: ShellDriverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShellDriverConfig {
        &self.config
    }

    /// `<binary> --version`, or `None` when the binary cannot be run.
    pub fn version(&self) -> Option<String> {
        let out = Command::new(&self.config.binary)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .ok()?;
        if !out.status.success() {
            return None;
        }
        let s = String::from_utf8_lossy(&out.stdout);
        let trimmed = s.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    }

    pub fn is_available(&self) -> bool {
        self.version().is_some()
    }
}

impl Driver for ShellDriver {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn connect(&self, fixture: &Path) -> Result<Box<dyn DriverConnection>> {
        // The shell would silently create a missing file.
        if !fixture.is_file() {
            return Err(ParityError::fetch(
                &self.config.name,
                format!("no fixture at {}", fixture.display()),
            ));
        }
        Ok(Box::new(ShellConnection {
            config: self.config.clone(),
            fixture: fixture.to_path_buf(),
        }))
    }
}

struct ShellConnection {
    config: ShellDriverConfig,
    fixture: PathBuf,
}

impl ShellConnection {
    fn script(&self, sql: &str) -> String {
        let mut script = String::new();
        for line in &self.config.preamble {
            script.push_str(line);
            script.push('\n');
        }
        script.push_str(".headers off\n.mode quote\n");
        let sql = sql.trim();
        script.push_str(sql);
        if !sql.ends_with(';') {
            script.push(';');
        }
        script.push('\n');
        script
    }

    fn run(&self, sql: &str) -> std::result::Result<String, String> {
        let script = tempfile::NamedTempFile::new().map_err(|e| e.to_string())?;
        std::fs::write(script.path(), self.script(sql)).map_err(|e| e.to_string())?;
        let stdin = script.reopen().map_err(|e| e.to_string())?;

        let mut cmd = Command::new(&self.config.binary);
        cmd.args(&self.config.args);
        if self.config.read_only {
            cmd.arg("-readonly");
        }
        let output = cmd
            .arg(&self.fixture)
            .stdin(Stdio::from(stdin))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| format!("failed to run {}: {e}", self.config.binary))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() || !stderr.trim().is_empty() {
            let code = output.status.code().unwrap_or(-1);
            return Err(format!(
                "exit={code}: {}",
                truncate_string(stderr.trim(), STDERR_SNIPPET_BYTES)
            ));
        }
        String::from_utf8(output.stdout).map_err(|e| format!("output is not UTF-8: {e}"))
    }
}

impl DriverConnection for ShellConnection {
    fn execute(&mut self, sql: &str) -> Result<Box<dyn DriverCursor>> {
        let fail = |detail: String| ParityError::fetch(&self.config.name, detail);
        let stdout = self.run(sql).map_err(fail)?;
        let rows = parse_quote_output(&stdout).map_err(fail)?;
        debug!(
            driver = %self.config.name,
            bytes = stdout.len(),
            rows = rows.len(),
            "shell statement executed"
        );
        Ok(Box::new(BufferedCursor::new(rows)))
    }
}

/// Parse `.mode quote` output into rows, one per line.
pub fn parse_quote_output(out: &str) -> std::result::Result<Vec<Row>, String> {
    QuoteParser { src: out, pos: 0 }.rows()
}

struct QuoteParser<'a> {
    src: &'a str,
    pos: usize,
}

impl QuoteParser<'_> {
    fn rows(mut self) -> std::result::Result<Vec<Row>, String> {
        let mut rows = Vec::new();
        loop {
            self.skip_line_ends();
            if self.at_end() {
                return Ok(rows);
            }
            rows.push(self.row()?);
        }
    }

    fn row(&mut self) -> std::result::Result<Row, String> {
        let mut values = vec![self.value()?];
        loop {
            match self.peek() {
                None | Some(b'\n' | b'\r') => return Ok(Row::new(values)),
                Some(b',') => {
                    self.pos += 1;
                    values.push(self.value()?);
                }
                Some(_) => return Err(self.error("expected ',' or end of row")),
            }
        }
    }

    fn value(&mut self) -> std::result::Result<Value, String> {
        let rest = self.rest();
        if rest.starts_with('\'') {
            return self.quoted().map(Value::Text);
        }
        if rest.starts_with("X'") || rest.starts_with("x'") {
            self.pos += 1;
            return self.blob();
        }
        if rest.starts_with("NULL") {
            self.pos += 4;
            return Ok(Value::Null);
        }
        if rest.starts_with("replace(") {
            self.pos += "replace(".len();
            return self.replace_call();
        }
        if rest.starts_with("unistr(") {
            self.pos += "unistr(".len();
            return self.unistr_call();
        }
        self.number()
    }

    /// `'...'` with `''` standing for one quote.
    fn quoted(&mut self) -> std::result::Result<String, String> {
        self.consume("'")?;
        let mut text = String::new();
        loop {
            let rest = self.rest();
            let Some(end) = rest.find('\'') else {
                return Err(self.error("unterminated string"));
            };
            text.push_str(&rest[..end]);
            self.pos += end + 1;
            if self.peek() == Some(b'\'') {
                text.push('\'');
                self.pos += 1;
            } else {
                return Ok(text);
            }
        }
    }

    fn blob(&mut self) -> std::result::Result<Value, String> {
        let start = self.pos;
        let hex = self.quoted()?;
        decode_hex(&hex)
            .map(Value::Blob)
            .ok_or_else(|| format!("invalid blob literal at byte {start}"))
    }

    /// `replace(<value>,'<token>',char(<n>))`, which the shell emits for
    /// text containing line breaks.
    fn replace_call(&mut self) -> std::result::Result<Value, String> {
        let Value::Text(inner) = self.value()? else {
            return Err(self.error("replace() over a non-text value"));
        };
        self.consume(",")?;
        let token = self.quoted()?;
        self.consume(",char(")?;
        let digits_len = self
            .rest()
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        let code: u32 = self.rest()[..digits_len]
            .parse()
            .map_err(|_| self.error("expected a character code"))?;
        self.pos += digits_len;
        self.consume("))")?;
        let ch = char::from_u32(code).ok_or_else(|| self.error("invalid character code"))?;
        Ok(Value::Text(inner.replace(&token, ch.encode_utf8(&mut [0; 4]))))
    }

    /// `unistr('<text>')`, the shell's form for text with control
    /// characters.
    fn unistr_call(&mut self) -> std::result::Result<Value, String> {
        let raw = self.quoted()?;
        self.consume(")")?;
        Ok(Value::Text(decode_unistr(&raw)))
    }

    fn number(&mut self) -> std::result::Result<Value, String> {
        let rest = self.rest();
        let len = rest.find([',', '\n', '\r']).unwrap_or(rest.len());
        let token = &rest[..len];
        let value = match token {
            "Inf" | "+Inf" => Some(Value::Real(f64::INFINITY)),
            "-Inf" => Some(Value::Real(f64::NEG_INFINITY)),
            _ if token.contains(['.', 'e', 'E']) => token.parse::<f64>().ok().map(Value::Real),
            _ => token.parse::<i64>().ok().map(Value::Integer),
        };
        let value = value.ok_or_else(|| self.error(&format!("unrecognized literal {token:?}")))?;
        self.pos += len;
        Ok(value)
    }

    fn consume(&mut self, lit: &str) -> std::result::Result<(), String> {
        if self.rest().starts_with(lit) {
            self.pos += lit.len();
            Ok(())
        } else {
            Err(self.error(&format!("expected {lit:?}")))
        }
    }

    fn skip_line_ends(&mut self) {
        while matches!(self.peek(), Some(b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn rest(&self) -> &str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn error(&self, what: &str) -> String {
        format!("{what} at byte {} of shell output", self.pos)
    }
}

fn decode_hex(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return None;
    }
    hex.as_bytes()
        .chunks_exact(2)
        .map(|pair| {
            let s = std::str::from_utf8(pair).ok()?;
            u8::from_str_radix(s, 16).ok()
        })
        .collect()
}

/// Undo the shell's `unistr()` wrapping. Only control characters are
/// escaped, as `\uXXXX`; backslashes are printed as-is, so any other
/// backslash sequence is literal text.
fn decode_unistr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(at) = rest.find('\\') {
        out.push_str(&rest[..at]);
        rest = &rest[at..];
        if let Some((c, len)) = escaped_control(rest) {
            out.push(c);
            rest = &rest[len..];
        } else {
            out.push('\\');
            rest = &rest[1..];
        }
    }
    out.push_str(rest);
    out
}

/// `\uXXXX` or `\UXXXXXXXX` at the start of `s`, if it names a control
/// character. Returns the character and the escape length.
fn escaped_control(s: &str) -> Option<(char, usize)> {
    let digits = match s.as_bytes().get(1)? {
        b'u' => 4,
        b'U' => 8,
        _ => return None,
    };
    let hex = s.get(2..2 + digits)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let c = char::from_u32(u32::from_str_radix(hex, 16).ok()?)?;
    c.is_control().then_some((c, 2 + digits))
}

/// Truncate to at most `max_bytes` bytes on a char boundary.
fn truncate_string(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        return s.to_owned();
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    let mut truncated = s[..end].to_owned();
    truncated.push_str("...[truncated]");
    truncated
}
