//! Multi-index driver: scans index files in order against one constraint
//! list, skipping files that cannot be opened or read and stopping once
//! nothing is left to resolve.

use std::path::{Path, PathBuf};

use vsolve_core::constraint::ConstraintList;
use vsolve_util::errors::{VsolveError, VsolveResult};
use vsolve_util::fs::open_reader;
use vsolve_util::progress;

use crate::report::ResolutionReport;
use crate::scan::{MatchSink, ScanError, ScanMode};
use crate::state::Resolution;

/// Resolves a constraint list against a sequence of index files.
#[derive(Debug)]
pub struct Resolver {
    resolution: Resolution,
    verbose: bool,
}

impl Resolver {
    pub fn new(list: ConstraintList, mode: ScanMode) -> Self {
        Self {
            resolution: Resolution::new(list, mode),
            verbose: false,
        }
    }

    /// Print status lines on stderr for each index.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Scan `indexes` in order, sending matches to `sink` as they are found.
    ///
    /// Each file is closed before the next is opened. Files that cannot be
    /// opened or read (a directory, a failing device) are recorded in
    /// [`ResolutionReport::skipped`]; matches found before a read failure
    /// still count. Only sink write errors abort the run.
    pub fn resolve<P, S>(mut self, indexes: &[P], sink: &mut S) -> VsolveResult<ResolutionReport>
    where
        P: AsRef<Path>,
        S: MatchSink + ?Sized,
    {
        let mut skipped = Vec::new();

        for path in indexes {
            let path: &Path = path.as_ref();
            if self.resolution.is_complete() {
                tracing::debug!("nothing left to resolve; not opening {}", path.display());
                break;
            }

            let reader = match open_reader(path) {
                Ok(reader) => reader,
                Err(e) => {
                    tracing::info!("skipping index {}: {e}", path.display());
                    self.skip(path, &mut skipped);
                    continue;
                }
            };

            if self.verbose {
                progress::status("Scanning", &path.display().to_string());
            }
            let stats = match self.resolution.scan(reader, sink) {
                Ok(stats) => stats,
                Err(ScanError::Read { source, stats }) => {
                    tracing::info!(
                        "skipping rest of index {} after {} line(s): {source}",
                        path.display(),
                        stats.lines
                    );
                    self.skip(path, &mut skipped);
                    continue;
                }
                Err(ScanError::Sink(e)) => return Err(VsolveError::Io(e).into()),
            };
            tracing::debug!(
                index = %path.display(),
                lines = stats.lines,
                malformed = stats.malformed,
                matches = stats.matches,
                stopped_early = stats.stopped_early,
                remaining = self.resolution.remaining().len(),
                "index scanned"
            );
        }

        let mut report = self.resolution.finish();
        report.skipped = skipped;
        if self.verbose {
            progress::status_info("Resolved", &report.summary());
        }
        Ok(report)
    }

    fn skip(&self, path: &Path, skipped: &mut Vec<PathBuf>) {
        if self.verbose {
            progress::status_warn("Skipped", &path.display().to_string());
        }
        skipped.push(path.to_path_buf());
    }
}
