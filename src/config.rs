//! Client configuration assembled from CLI flags and environment.

use std::path::PathBuf;

use crate::error::SnapshotError;
use crate::hf::HubSettings;

/// Check that `raw` is an absolute http(s) URL and strip trailing slashes.
pub fn normalize_endpoint(raw: &str) -> Result<String, SnapshotError> {
    let invalid = |message: &str| SnapshotError::InvalidEndpoint {
        endpoint: raw.to_string(),
        message: message.to_string(),
    };

    let trimmed = raw.trim().trim_end_matches('/');
    let url = url::Url::parse(trimmed).map_err(|source| invalid(&source.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("expected an http or https URL"));
    }
    if url.host_str().is_none() {
        return Err(invalid("URL is missing a host"));
    }

    Ok(trimmed.to_string())
}

/// Build [`HubSettings`], validating the endpoint.
pub fn hub_settings(
    endpoint: &str,
    cache_dir: Option<PathBuf>,
    token: Option<String>,
    progress: bool,
) -> Result<HubSettings, SnapshotError> {
    Ok(HubSettings {
        endpoint: normalize_endpoint(endpoint)?,
        cache_dir,
        token: token.filter(|token| !token.trim().is_empty()),
        progress,
    })
}
