//! Hubsnap: download a full Hugging Face Hub repository snapshot.
//!
//! The repository type (dataset, model or space) is not given on the command
//! line. It is inferred by probing the hub's metadata endpoint for each type
//! in a fixed order, and the first hit wins. The transfer itself, the on-disk
//! cache and authentication are handled by `hf-hub`.
//!
//! # Modules
//!
//! - [`hf`]: Hub-facing types, repo-type resolution and the `hf-hub` client
//! - [`download`]: The download driver and its progress output
//! - [`config`]: Endpoint validation and client settings
//! - [`error`]: Error types for hubsnap operations

pub mod config;
pub mod download;
pub mod error;
pub mod hf;
pub mod logging;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub use error::{HubError, SnapshotError};

use download::DownloadOptions;
use hf::{HubClient, DEFAULT_ENDPOINT, DEFAULT_ETAG_TIMEOUT_SECS};

/// The hubsnap CLI application.
#[derive(Parser)]
#[command(name = "hubsnap")]
#[command(version, about)]
struct Cli {
    /// Repository ID on the hub (e.g. 'bert-base-uncased' or 'org/name').
    repo_id: String,

    /// Revision to fetch (branch, tag, or commit hash). Default is the latest.
    #[arg(long)]
    revision: Option<String>,

    /// ETag timeout in seconds.
    #[arg(
        long,
        default_value_t = DEFAULT_ETAG_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    etag_timeout: u64,

    /// Hub endpoint to talk to.
    #[arg(long, env = "HF_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Cache directory for downloaded files (default: $HF_HOME/hub).
    #[arg(long, env = "HF_HUB_CACHE")]
    cache_dir: Option<PathBuf>,

    /// Access token (default: the token saved by `huggingface-cli login`).
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Disable download progress bars.
    #[arg(long)]
    no_progress: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Run the hubsnap CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), SnapshotError> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings =
        config::hub_settings(&cli.endpoint, cli.cache_dir, cli.token, !cli.no_progress)?;
    tracing::debug!(
        endpoint = %settings.endpoint,
        cache_dir = ?settings.cache_dir,
        "hub settings"
    );

    let client = HubClient::new(settings).map_err(SnapshotError::Client)?;
    let options = DownloadOptions {
        repo_id: cli.repo_id,
        revision: cli.revision,
        etag_timeout: Duration::from_secs(cli.etag_timeout),
    };

    let stdout = std::io::stdout();
    download::run_download(&client, options, &mut stdout.lock())?;
    Ok(())
}
