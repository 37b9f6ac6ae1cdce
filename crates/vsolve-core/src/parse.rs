//! Constraint list parser.
//!
//! Reads `NAME OP VERSION` lines (fields separated by one or more spaces)
//! until the stream ends or a line fails to parse. Whatever was parsed before
//! the failure is kept; the caller decides whether the failure is fatal via
//! [`ParsedConstraints::into_strict`] or [`ParsedConstraints::into_lenient`].

use std::io::BufRead;

use thiserror::Error;
use vsolve_util::errors::VsolveError;

use crate::constraint::{ConstraintList, Predicate};
use crate::operator::Operator;
use crate::{MAX_PACKAGE_LEN, MAX_VERSION_LEN};

/// A constraint line that could not be parsed, with its 1-based line number.
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("expected `NAME OP VERSION`, found {found} field(s) in `{text}`")]
    Shape { found: usize, text: String },

    #[error("invalid operator `{token}`")]
    Operator { token: String },

    #[error("{field} `{value}` is {} bytes long, the limit is {max}", .value.len())]
    TooLong {
        field: &'static str,
        value: String,
        max: usize,
    },

    #[error("could not read constraint input: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ParseError> for VsolveError {
    fn from(err: ParseError) -> Self {
        VsolveError::Parse {
            line: err.line,
            message: err.kind.to_string(),
        }
    }
}

/// Result of parsing a constraint stream: the parsed prefix plus the error
/// that stopped parsing, if any.
#[derive(Debug)]
pub struct ParsedConstraints {
    pub list: ConstraintList,
    pub error: Option<ParseError>,
}

impl ParsedConstraints {
    /// Fail on any malformed line.
    pub fn into_strict(self) -> Result<ConstraintList, ParseError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.list),
        }
    }

    /// Keep the prefix parsed before a malformed line.
    pub fn into_lenient(self) -> ConstraintList {
        if let Some(err) = &self.error {
            tracing::warn!(
                "constraint parsing stopped at {err}; keeping {} package(s) read before it",
                self.list.len()
            );
        }
        self.list
    }
}

/// Parse a constraint stream into an expanded [`ConstraintList`].
///
/// Blank lines are skipped. Expansion of `~>` runs once over the whole list
/// after the last line, so it also applies to the prefix kept on failure.
pub fn parse_constraints(reader: impl BufRead) -> ParsedConstraints {
    let mut list = ConstraintList::new();
    let mut error = None;

    for (idx, line) in reader.lines().enumerate() {
        let parsed = line
            .map_err(ParseErrorKind::from)
            .and_then(|line| parse_line(&line));
        match parsed {
            Ok(Some(predicate)) => list.push(predicate),
            Ok(None) => {}
            Err(kind) => {
                error = Some(ParseError {
                    line: idx + 1,
                    kind,
                });
                break;
            }
        }
    }

    ParsedConstraints {
        list: list.expanded(),
        error,
    }
}

/// Parse one constraint line. `Ok(None)` means the line was blank.
pub fn parse_line(line: &str) -> Result<Option<Predicate>, ParseErrorKind> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(' ').filter(|f| !f.is_empty()).collect();
    let [package, op, version] = fields[..] else {
        return Err(ParseErrorKind::Shape {
            found: fields.len(),
            text: line.to_string(),
        });
    };

    let op = Operator::parse(op).ok_or_else(|| ParseErrorKind::Operator {
        token: op.to_string(),
    })?;
    check_len("package name", package, MAX_PACKAGE_LEN)?;
    check_len("version", version, MAX_VERSION_LEN)?;

    Ok(Some(Predicate::new(package, op, version)))
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ParseErrorKind> {
    if value.len() > max {
        return Err(ParseErrorKind::TooLong {
            field,
            value: value.to_string(),
            max,
        });
    }
    Ok(())
}
