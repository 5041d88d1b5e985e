use std::path::{Path, PathBuf};
use std::time::Duration;

use hf_hub::RepoType;
use serde::Deserialize;

use crate::error::HubError;

use super::api_kind;

/// Revision metadata returned by `/api/{kind}s/{repo_id}/revision/{rev}`.
#[derive(Clone, Debug, Deserialize)]
pub struct RevisionInfo {
    pub sha: String,
    #[serde(default)]
    pub siblings: Vec<RevisionSibling>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RevisionSibling {
    pub rfilename: String,
}

/// Snapshot already present in the local `hf-hub` cache.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CachedSnapshot {
    pub commit: String,
    pub path: PathBuf,
    pub files: usize,
}

/// Resolve `revision` to a commit and its file list, bounded by `timeout`.
///
/// HTTP error statuses come back as [`HubError::Revision`]; anything that kept
/// the request from completing comes back as [`HubError::Transport`].
pub fn fetch_revision(
    endpoint: &str,
    repo_type: RepoType,
    repo_id: &str,
    revision: &str,
    token: Option<&str>,
    timeout: Duration,
) -> Result<RevisionInfo, HubError> {
    let url = revision_url(endpoint, repo_type, repo_id, revision)?;
    let location = url.to_string();

    let config = ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .build();
    let agent: ureq::Agent = config.into();

    let mut request = agent.get(url.as_str());
    if let Some(token) = token {
        request = request.header("Authorization", &format!("Bearer {token}"));
    }

    let mut response = request.call().map_err(|source| match source {
        ureq::Error::StatusCode(status) => HubError::Revision {
            url: location.clone(),
            status,
        },
        source => HubError::Transport {
            url: location.clone(),
            source,
        },
    })?;

    response
        .body_mut()
        .read_json::<RevisionInfo>()
        .map_err(|source| HubError::Decode {
            url: location.clone(),
            message: source.to_string(),
        })
}

/// Build the revision metadata URL. The revision is a single path segment,
/// so `refs/pr/1` is sent as `refs%2Fpr%2F1`.
pub fn revision_url(
    endpoint: &str,
    repo_type: RepoType,
    repo_id: &str,
    revision: &str,
) -> Result<url::Url, HubError> {
    let invalid = |message: String| HubError::InvalidUrl {
        url: endpoint.to_string(),
        message,
    };

    if !is_safe_revision(revision) {
        return Err(invalid(format!(
            "revision '{revision}' has an empty, '.' or '..' path component"
        )));
    }

    let mut url = url::Url::parse(endpoint).map_err(|source| invalid(source.to_string()))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| invalid("endpoint cannot be a base URL".to_string()))?;
        segments.pop_if_empty().push("api").push(api_kind(repo_type));
        for part in repo_id.split('/') {
            segments.push(part);
        }
        segments.push("revision").push(revision);
    }

    Ok(url)
}

/// Look up a cached snapshot for `revision` under `cache_dir/repo_folder`.
///
/// A 40-hex revision names the commit directly; anything else goes through
/// `refs/{revision}`. Returns `Ok(None)` when nothing usable is cached.
pub fn cached_snapshot(
    cache_dir: &Path,
    repo_folder: &str,
    revision: &str,
) -> Result<Option<CachedSnapshot>, std::io::Error> {
    if !is_safe_revision(revision) {
        return Ok(None);
    }
    let repo_dir = cache_dir.join(repo_folder);

    let commit = if is_commit_hash(revision) {
        revision.to_string()
    } else {
        match std::fs::read_to_string(repo_dir.join("refs").join(revision)) {
            Ok(contents) => contents.trim().to_string(),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        }
    };
    if !is_commit_hash(&commit) {
        return Ok(None);
    }

    let path = repo_dir.join("snapshots").join(&commit);
    if !path.is_dir() {
        return Ok(None);
    }

    let files = walkdir::WalkDir::new(&path)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| !entry.file_type().is_dir())
        .count();

    Ok(Some(CachedSnapshot {
        commit,
        path,
        files,
    }))
}

/// `url` drops `.` and `..` segments and the same value is joined under
/// `refs/`, so those components never name a revision.
fn is_safe_revision(revision: &str) -> bool {
    revision
        .split('/')
        .all(|part| !part.is_empty() && part != "." && part != "..")
}

fn is_commit_hash(revision: &str) -> bool {
    revision.len() == 40 && revision.bytes().all(|b| b.is_ascii_hexdigit())
}
