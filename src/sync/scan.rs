use tracing::{info, warn};

use super::{Indexer, Reconciliation, discover};
use crate::store::TrackStore;

/// Per-outcome tally of one full scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub added: usize,
    pub moved: usize,
    pub modified: usize,
    pub unchanged: usize,
    pub failed: usize,
}

impl<S: TrackStore> Indexer<S> {
    /// Reconcile every track file under the collection root.
    ///
    /// Used both to populate an empty catalog and as a periodic repair
    /// pass for changes the watch loop missed. Per-file failures are
    /// logged and counted; the pass always runs to completion.
    pub fn index_all(&mut self) -> ScanSummary {
        let files = discover::collect_files(
            &self.settings.root,
            &self.settings.extensions,
            self.settings.follow_links,
        );
        info!(
            files = files.len(),
            root = %self.settings.root.display(),
            "scanning collection"
        );

        let mut summary = ScanSummary::default();

        for path in files {
            let candidate = match self.builder.build(&path) {
                Ok(candidate) => candidate,
                Err(error) => {
                    warn!(path = %path.display(), %error, "failed to build track");
                    summary.failed += 1;
                    continue;
                }
            };

            match self.reconcile(&candidate) {
                Ok(outcome) => {
                    match outcome {
                        Reconciliation::Added => summary.added += 1,
                        Reconciliation::Moved => summary.moved += 1,
                        Reconciliation::Modified => summary.modified += 1,
                        Reconciliation::Unchanged => summary.unchanged += 1,
                    }
                    if outcome.mutated() {
                        self.run_processors(&candidate);
                    }
                }
                Err(error) => {
                    warn!(path = %path.display(), %error, "failed to index track");
                    summary.failed += 1;
                }
            }
        }

        summary
    }
}
