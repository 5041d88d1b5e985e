//! Hugging Face Hub orchestration helpers.
//!
//! This module owns the remote-facing concerns: repo-type resolution, the
//! revision preflight that bounds cache validation, and snapshot acquisition.
//! Transfer, caching and authentication are delegated to `hf-hub`.

pub mod acquire;
pub mod preflight;
pub mod resolve;

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use hf_hub::RepoType;

use crate::error::HubError;

pub use acquire::HubClient;
pub use resolve::resolve_repo_category;

/// Hub used when neither `--endpoint` nor `HF_ENDPOINT` is set.
pub const DEFAULT_ENDPOINT: &str = "https://huggingface.co";

/// Default ETag timeout, in seconds.
pub const DEFAULT_ETAG_TIMEOUT_SECS: u64 = 86_400;

/// Branch fetched when no revision is requested.
pub const DEFAULT_REVISION: &str = "main";

/// Repo type a fetch uses when resolution found nothing.
///
/// The hub treats a missing repo type as a model; this is an inherited
/// assumption, not something the hub documents as a contract.
///
/// When the hub is unreachable every probe fails, so the category is
/// `Unknown` and the offline cache fallback only looks under `models--*`.
/// A dataset or space cached earlier is not found in that case.
pub const UNKNOWN_CATEGORY_FETCHES_AS: RepoType = RepoType::Model;

/// Category of a hub repository as inferred by probing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RepoCategory {
    Dataset,
    Model,
    Space,
    Unknown,
}

impl RepoCategory {
    /// Categories probed by the resolver, highest priority first.
    pub const PROBE_ORDER: [RepoCategory; 3] =
        [RepoCategory::Dataset, RepoCategory::Model, RepoCategory::Space];

    pub fn name(&self) -> &'static str {
        match self {
            RepoCategory::Dataset => "dataset",
            RepoCategory::Model => "model",
            RepoCategory::Space => "space",
            RepoCategory::Unknown => "unknown",
        }
    }

    /// The `hf-hub` repo type, or `None` when the category is unspecified.
    pub fn repo_type(&self) -> Option<RepoType> {
        match self {
            RepoCategory::Dataset => Some(RepoType::Dataset),
            RepoCategory::Model => Some(RepoType::Model),
            RepoCategory::Space => Some(RepoType::Space),
            RepoCategory::Unknown => None,
        }
    }

    /// The repo type actually used on the wire.
    pub fn fetch_repo_type(&self) -> RepoType {
        self.repo_type().unwrap_or(UNKNOWN_CATEGORY_FETCHES_AS)
    }
}

impl fmt::Display for RepoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Path segment of the hub API for a repo type (`models`, `datasets`, `spaces`).
pub(crate) fn api_kind(repo_type: RepoType) -> &'static str {
    match repo_type {
        RepoType::Model => "models",
        RepoType::Dataset => "datasets",
        RepoType::Space => "spaces",
    }
}

/// One snapshot download, built once per invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadRequest {
    pub repo_id: String,
    pub category: RepoCategory,
    pub revision: Option<String>,
    pub etag_timeout: Duration,
}

impl DownloadRequest {
    pub fn new(repo_id: impl Into<String>, category: RepoCategory) -> Self {
        Self {
            repo_id: repo_id.into(),
            category,
            revision: None,
            etag_timeout: Duration::from_secs(DEFAULT_ETAG_TIMEOUT_SECS),
        }
    }

    pub fn with_revision(mut self, revision: Option<String>) -> Self {
        self.revision = revision;
        self
    }

    pub fn with_etag_timeout(mut self, etag_timeout: Duration) -> Self {
        self.etag_timeout = etag_timeout;
        self
    }

    /// Revision sent to the hub: the requested one, or the default branch.
    pub fn effective_revision(&self) -> &str {
        self.revision.as_deref().unwrap_or(DEFAULT_REVISION)
    }
}

/// A snapshot materialised in the local cache.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub path: PathBuf,
    pub commit: String,
    pub files: usize,
    /// True when the hub was unreachable and cached content was used.
    pub from_cache: bool,
}

/// Client configuration resolved from flags and environment.
#[derive(Clone, Debug)]
pub struct HubSettings {
    pub endpoint: String,
    pub cache_dir: Option<PathBuf>,
    pub token: Option<String>,
    pub progress: bool,
}

/// Per-category metadata lookup. Success means the repo exists there.
pub trait MetadataLookup {
    fn lookup(&self, repo_id: &str, category: RepoCategory) -> Result<(), HubError>;
}

/// Full snapshot download of one repository revision.
pub trait SnapshotFetch {
    /// Endpoint the fetch talks to, for display.
    fn endpoint(&self) -> &str;

    fn fetch(&self, request: &DownloadRequest) -> Result<Snapshot, HubError>;
}
