//! Resolution outcome and unresolved-package reporting.

use std::fmt;
use std::path::PathBuf;

use vsolve_util::errors::VsolveError;

/// Summary of a finished resolution.
///
/// `Display` renders one `NAME -` line per unresolved package, the format
/// written after all index output.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResolutionReport {
    /// Number of matches emitted across all indexes.
    pub matches: usize,
    pub indexes_scanned: usize,
    /// Packages never satisfied, in constraint order.
    pub unresolved: Vec<String>,
    /// Index files that could not be opened.
    pub skipped: Vec<PathBuf>,
}

impl ResolutionReport {
    pub fn is_resolved(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// One-line human summary for status output.
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} match(es) from {} index(es), {} unresolved",
            self.matches,
            self.indexes_scanned,
            self.unresolved.len()
        );
        if !self.skipped.is_empty() {
            summary.push_str(&format!(", {} index(es) skipped", self.skipped.len()));
        }
        summary
    }

    /// Turn unresolved packages into an error so the process exits non-zero.
    pub fn into_result(self) -> Result<Self, VsolveError> {
        if self.is_resolved() {
            Ok(self)
        } else {
            Err(VsolveError::Unresolved {
                count: self.unresolved.len(),
                packages: self.unresolved,
            })
        }
    }
}

impl fmt::Display for ResolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for package in &self.unresolved {
            writeln!(f, "{package} -")?;
        }
        Ok(())
    }
}
