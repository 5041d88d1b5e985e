//! The download command: resolve the repo type, announce, then fetch.
//!
//! The driver performs no retry and no recovery of its own. Fetch failures
//! are wrapped once with the repository id and handed back to the caller.

mod report;

pub use report::{DownloadPlan, SnapshotSummary};

use std::io::Write;
use std::time::Duration;

use crate::error::SnapshotError;
use crate::hf::{
    resolve_repo_category, DownloadRequest, MetadataLookup, Snapshot, SnapshotFetch,
    DEFAULT_ETAG_TIMEOUT_SECS,
};

/// User-facing inputs of one download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadOptions {
    pub repo_id: String,
    pub revision: Option<String>,
    pub etag_timeout: Duration,
}

impl DownloadOptions {
    pub fn new(repo_id: impl Into<String>) -> Self {
        Self {
            repo_id: repo_id.into(),
            revision: None,
            etag_timeout: Duration::from_secs(DEFAULT_ETAG_TIMEOUT_SECS),
        }
    }
}

/// Resolve the repo category and build the request for it.
pub fn plan_download<L: MetadataLookup + ?Sized>(
    lookup: &L,
    options: DownloadOptions,
) -> DownloadRequest {
    let category = resolve_repo_category(lookup, &options.repo_id);
    DownloadRequest::new(options.repo_id, category)
        .with_revision(options.revision)
        .with_etag_timeout(options.etag_timeout)
}

/// Run one download end to end, writing progress lines to `out`.
pub fn run_download<H, W>(
    hub: &H,
    options: DownloadOptions,
    out: &mut W,
) -> Result<Snapshot, SnapshotError>
where
    H: MetadataLookup + SnapshotFetch + ?Sized,
    W: Write,
{
    let request = plan_download(hub, options);
    tracing::info!(
        repo_id = %request.repo_id,
        category = %request.category,
        revision = request.effective_revision(),
        "resolved download request"
    );

    write!(
        out,
        "{}",
        DownloadPlan {
            endpoint: hub.endpoint(),
            request: &request,
        }
    )?;
    out.flush()?;

    let snapshot = hub
        .fetch(&request)
        .map_err(|source| SnapshotError::Fetch {
            repo_id: request.repo_id.clone(),
            source,
        })?;

    write!(out, "{}", SnapshotSummary(&snapshot))?;
    Ok(snapshot)
}
