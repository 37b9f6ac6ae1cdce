//! Merge scan of one index stream against the constraint list.
//!
//! Both inputs are sorted ascending by package name, so a single cursor into
//! the constraint list only ever moves forward while the index is read line
//! by line. Index lines look like `NAME VERSION [anything else]`.

use std::fmt;
use std::io::{self, BufRead, Write};

use thiserror::Error;
use vsolve_core::constraint::ConstraintList;

/// How matches are emitted for a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// One match per package: once a group is satisfied it is neither
    /// re-tested nor re-emitted, in this index or any later one.
    #[default]
    FirstMatch,
    /// Every accepted index line is emitted.
    AllMatches,
}

/// An accepted `(package, version)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub package: String,
    pub version: String,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.package, self.version)
    }
}

/// Receives matches in index-encounter order.
pub trait MatchSink {
    fn accept(&mut self, package: &str, version: &str) -> io::Result<()>;
}

impl MatchSink for Vec<Match> {
    fn accept(&mut self, package: &str, version: &str) -> io::Result<()> {
        self.push(Match {
            package: package.to_string(),
            version: version.to_string(),
        });
        Ok(())
    }
}

/// Writes each match as a `NAME VERSION` line.
pub struct WriteSink<W: Write>(pub W);

impl<W: Write> MatchSink for WriteSink<W> {
    fn accept(&mut self, package: &str, version: &str) -> io::Result<()> {
        writeln!(self.0, "{package} {version}")
    }
}

/// Counters for one scanned index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines: usize,
    /// Lines with fewer than two fields or invalid UTF-8.
    pub malformed: usize,
    pub matches: usize,
    /// The cursor ran past the last constraint before the index ended.
    pub stopped_early: bool,
}

/// Why a scan stopped before the end of its index.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The index stream failed. Matches already handed to the sink stand;
    /// `stats` counts what was read up to the failure.
    #[error("could not read index: {source}")]
    Read { source: io::Error, stats: ScanStats },

    #[error("could not write match: {0}")]
    Sink(#[source] io::Error),
}

/// Scan one index stream, marking accepted groups satisfied and handing each
/// match to `sink`.
///
/// Bad index lines are skipped and counted.
pub fn scan_index<R: BufRead, S: MatchSink + ?Sized>(
    list: &mut ConstraintList,
    mut reader: R,
    mode: ScanMode,
    sink: &mut S,
) -> Result<ScanStats, ScanError> {
    let mut stats = ScanStats::default();
    let groups = list.groups_mut();
    if groups.is_empty() {
        return Ok(stats);
    }

    let mut cursor = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(source) => return Err(ScanError::Read { source, stats }),
        }
        stats.lines += 1;

        let Some((name, version)) = split_entry(&buf) else {
            stats.malformed += 1;
            continue;
        };

        // First-byte pre-filter; byte order makes it agree with the full
        // comparison below.
        if groups[cursor].package().as_bytes().first() > name.as_bytes().first() {
            continue;
        }

        while groups[cursor].package() < name {
            cursor += 1;
            if cursor == groups.len() {
                stats.stopped_early = true;
                return Ok(stats);
            }
        }

        let group = &mut groups[cursor];
        if group.package() != name {
            continue;
        }
        if mode == ScanMode::FirstMatch && group.is_satisfied() {
            continue;
        }
        if group.accepts(version) {
            group.mark_satisfied();
            stats.matches += 1;
            tracing::trace!(package = name, version, "index entry accepted");
            sink.accept(name, version).map_err(ScanError::Sink)?;
        }
    }

    Ok(stats)
}

/// Split an index line into its first two whitespace-separated fields.
fn split_entry(line: &[u8]) -> Option<(&str, &str)> {
    let line = std::str::from_utf8(line).ok()?;
    let mut fields = line.split_ascii_whitespace();
    let name = fields.next()?;
    let version = fields.next()?;
    Some((name, version))
}
