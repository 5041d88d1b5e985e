//! Human-readable progress lines printed around a snapshot download.
//!
//! These lines are informational only; nothing parses them.

use std::fmt;

use crate::hf::{DownloadRequest, RepoCategory, Snapshot, UNKNOWN_CATEGORY_FETCHES_AS};

/// What is about to be fetched, printed before the download starts.
#[derive(Clone, Debug)]
pub struct DownloadPlan<'a> {
    pub endpoint: &'a str,
    pub request: &'a DownloadRequest,
}

impl fmt::Display for DownloadPlan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Using hub endpoint: {}", self.endpoint)?;

        writeln!(f, "Inferred repo type:")?;
        match self.request.category {
            RepoCategory::Unknown => writeln!(
                f,
                "{} (fetching as {:?})",
                RepoCategory::Unknown,
                UNKNOWN_CATEGORY_FETCHES_AS
            )?,
            category => writeln!(f, "{category}")?,
        }

        writeln!(
            f,
            "Will start downloading revision '{}' from this repo_id:",
            self.request.revision.as_deref().unwrap_or("latest")
        )?;
        writeln!(f, "{}", self.request.repo_id)?;
        writeln!(f)
    }
}

/// Where the snapshot ended up.
#[derive(Clone, Debug)]
pub struct SnapshotSummary<'a>(pub &'a Snapshot);

impl fmt::Display for SnapshotSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        write!(
            f,
            "Snapshot ready at: {} (commit {}, {} file(s)",
            snapshot.path.display(),
            snapshot.commit,
            snapshot.files
        )?;
        if snapshot.from_cache {
            write!(f, ", served from cache")?;
        }
        writeln!(f, ")")
    }
}
