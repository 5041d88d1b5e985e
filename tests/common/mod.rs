#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::PathBuf;

use hubsnap::hf::{DownloadRequest, MetadataLookup, RepoCategory, Snapshot, SnapshotFetch};
use hubsnap::HubError;

/// How a failing probe fails.
#[derive(Clone, Copy, Debug)]
pub enum ProbeFailure {
    NotFound,
    Unauthorized,
    ServerError,
}

impl ProbeFailure {
    pub fn into_error(self, category: RepoCategory) -> HubError {
        let status = match self {
            ProbeFailure::NotFound => 404,
            ProbeFailure::Unauthorized => 401,
            ProbeFailure::ServerError => 503,
        };
        HubError::Revision {
            url: format!("https://hub.test/api/{}s/org/repo", category.name()),
            status,
        }
    }
}

/// In-memory hub: a set of namespaces where the repo exists, and a canned
/// fetch outcome.
pub struct FakeHub {
    pub existing: BTreeSet<&'static str>,
    pub failure: ProbeFailure,
    pub fetch_fails: bool,
    pub probes: RefCell<Vec<RepoCategory>>,
    pub fetched: RefCell<Vec<DownloadRequest>>,
}

impl FakeHub {
    pub fn with_namespaces(existing: &[RepoCategory]) -> Self {
        Self {
            existing: existing.iter().map(|category| category.name()).collect(),
            failure: ProbeFailure::NotFound,
            fetch_fails: false,
            probes: RefCell::new(Vec::new()),
            fetched: RefCell::new(Vec::new()),
        }
    }
}

impl MetadataLookup for FakeHub {
    fn lookup(&self, _repo_id: &str, category: RepoCategory) -> Result<(), HubError> {
        self.probes.borrow_mut().push(category);
        if self.existing.contains(category.name()) {
            Ok(())
        } else {
            Err(self.failure.into_error(category))
        }
    }
}

impl SnapshotFetch for FakeHub {
    fn endpoint(&self) -> &str {
        "https://hub.test"
    }

    fn fetch(&self, request: &DownloadRequest) -> Result<Snapshot, HubError> {
        self.fetched.borrow_mut().push(request.clone());
        if self.fetch_fails {
            return Err(HubError::Revision {
                url: "https://hub.test/api/models/org/repo/revision/main".to_string(),
                status: 404,
            });
        }
        Ok(Snapshot {
            path: PathBuf::from("/cache/snapshots/0000"),
            commit: "0000".to_string(),
            files: 1,
            from_cache: false,
        })
    }
}
