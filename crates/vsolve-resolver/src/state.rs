//! Resolution state carried across index files.

use std::io::BufRead;

use vsolve_core::constraint::ConstraintList;

use crate::report::ResolutionReport;
use crate::scan::{scan_index, MatchSink, ScanError, ScanMode, ScanStats};

/// Owns the constraint list for the lifetime of a resolution and narrows it
/// after every scanned index.
#[derive(Debug)]
pub struct Resolution {
    list: ConstraintList,
    mode: ScanMode,
    matches: usize,
    indexes: usize,
}

impl Resolution {
    pub fn new(list: ConstraintList, mode: ScanMode) -> Self {
        Self {
            list,
            mode,
            matches: 0,
            indexes: 0,
        }
    }

    /// Scan one index, then drop the groups it satisfied.
    ///
    /// In [`ScanMode::AllMatches`] satisfied groups stay in the list so later
    /// indexes are still searched for them; they only stop counting as
    /// unresolved. A read failure still drops whatever was satisfied before
    /// it, but the index does not count as scanned.
    pub fn scan<R: BufRead, S: MatchSink + ?Sized>(
        &mut self,
        reader: R,
        sink: &mut S,
    ) -> Result<ScanStats, ScanError> {
        let result = scan_index(&mut self.list, reader, self.mode, sink);
        match &result {
            Ok(stats) => {
                self.matches += stats.matches;
                self.indexes += 1;
            }
            Err(ScanError::Read { stats, .. }) => self.matches += stats.matches,
            Err(ScanError::Sink(_)) => return result,
        }
        if self.mode == ScanMode::FirstMatch {
            self.list = std::mem::take(&mut self.list).retain_unsatisfied();
        }
        result
    }

    /// Groups still in play.
    pub fn remaining(&self) -> &ConstraintList {
        &self.list
    }

    /// No further index can produce a match.
    pub fn is_complete(&self) -> bool {
        self.list.is_empty()
    }

    /// Consume the state, listing every package never satisfied.
    pub fn finish(self) -> ResolutionReport {
        ResolutionReport {
            matches: self.matches,
            indexes_scanned: self.indexes,
            unresolved: self.list.unsatisfied_packages(),
            skipped: Vec::new(),
        }
    }
}
