use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the hub client adapter.
#[derive(Debug, Error)]
pub enum HubError {
    #[error("failed to build hub client")]
    Build(#[source] hf_hub::api::sync::ApiError),

    #[error("hub API request failed")]
    Api(#[from] hf_hub::api::sync::ApiError),

    #[error("revision lookup at {url} returned HTTP {status}")]
    Revision { url: String, status: u16 },

    #[error("revision lookup at {url} failed")]
    Transport {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("invalid hub URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("could not decode revision metadata from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error(
        "hub unreachable and no cached snapshot for revision '{revision}' under {}",
        .cache_dir.display()
    )]
    NoCachedSnapshot {
        revision: String,
        cache_dir: PathBuf,
        #[source]
        source: Box<HubError>,
    },
}

impl HubError {
    /// True when the hub could not be reached at all, as opposed to answering
    /// with an error status.
    pub fn is_transport(&self) -> bool {
        matches!(self, HubError::Transport { .. })
    }
}

/// The main error type for hubsnap operations.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Invalid hub endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    #[error("Failed to set up hub client")]
    Client(#[source] HubError),

    #[error("Failed to fetch snapshot of '{repo_id}'")]
    Fetch {
        repo_id: String,
        #[source]
        source: HubError,
    },
}
