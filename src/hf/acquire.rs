use hf_hub::api::sync::{Api, ApiBuilder};
use hf_hub::{Cache, Repo};

use crate::error::HubError;

use super::preflight::{self, RevisionInfo};
use super::{DownloadRequest, HubSettings, MetadataLookup, RepoCategory, Snapshot, SnapshotFetch};

/// `hf-hub` backed implementation of the metadata lookup and snapshot fetch.
pub struct HubClient {
    api: Api,
    cache: Cache,
    endpoint: String,
    token: Option<String>,
}

impl HubClient {
    /// Build a client from resolved settings.
    ///
    /// Without an explicit token, the one saved in the cache directory is used.
    pub fn new(settings: HubSettings) -> Result<Self, HubError> {
        let cache = match settings.cache_dir {
            Some(dir) => Cache::new(dir),
            None => Cache::from_env(),
        };
        let token = settings.token.or_else(|| cache.token());

        let api = ApiBuilder::new()
            .with_endpoint(settings.endpoint.clone())
            .with_cache_dir(cache.path().clone())
            .with_token(token.clone())
            .with_progress(settings.progress)
            .build()
            .map_err(HubError::Build)?;

        Ok(Self {
            api,
            cache,
            endpoint: settings.endpoint,
            token,
        })
    }

    fn download_all(
        &self,
        request: &DownloadRequest,
        info: &RevisionInfo,
    ) -> Result<Snapshot, HubError> {
        let repo_type = request.category.fetch_repo_type();
        let pinned = Repo::with_revision(request.repo_id.clone(), repo_type, info.sha.clone());
        let api_repo = self.api.repo(pinned.clone());

        tracing::info!(
            repo_id = %request.repo_id,
            commit = %info.sha,
            files = info.siblings.len(),
            "downloading snapshot"
        );
        for sibling in &info.siblings {
            let local = api_repo.get(&sibling.rfilename)?;
            tracing::debug!(file = %sibling.rfilename, path = %local.display(), "file ready");
        }

        let revision = request.effective_revision();
        if revision != info.sha {
            let named =
                Repo::with_revision(request.repo_id.clone(), repo_type, revision.to_string());
            self.cache.repo(named).create_ref(&info.sha)?;
        }

        let path = self
            .cache
            .path()
            .join(pinned.folder_name())
            .join("snapshots")
            .join(&info.sha);
        std::fs::create_dir_all(&path)?;

        Ok(Snapshot {
            path,
            commit: info.sha.clone(),
            files: info.siblings.len(),
            from_cache: false,
        })
    }

    fn cached_fallback(
        &self,
        request: &DownloadRequest,
        cause: HubError,
    ) -> Result<Snapshot, HubError> {
        let revision = request.effective_revision();
        let repo = Repo::new(request.repo_id.clone(), request.category.fetch_repo_type());

        tracing::warn!(
            repo_id = %request.repo_id,
            revision,
            error = %cause,
            "hub unreachable, falling back to cached snapshot"
        );

        match preflight::cached_snapshot(self.cache.path(), &repo.folder_name(), revision)? {
            Some(cached) => Ok(Snapshot {
                path: cached.path,
                commit: cached.commit,
                files: cached.files,
                from_cache: true,
            }),
            None => Err(HubError::NoCachedSnapshot {
                revision: revision.to_string(),
                cache_dir: self.cache.path().clone(),
                source: Box::new(cause),
            }),
        }
    }
}

impl MetadataLookup for HubClient {
    fn lookup(&self, repo_id: &str, category: RepoCategory) -> Result<(), HubError> {
        let repo = Repo::new(repo_id.to_string(), category.fetch_repo_type());
        self.api.repo(repo).info()?;
        Ok(())
    }
}

impl SnapshotFetch for HubClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn fetch(&self, request: &DownloadRequest) -> Result<Snapshot, HubError> {
        let info = match preflight::fetch_revision(
            &self.endpoint,
            request.category.fetch_repo_type(),
            &request.repo_id,
            request.effective_revision(),
            self.token.as_deref(),
            request.etag_timeout,
        ) {
            Ok(info) => info,
            Err(err) if err.is_transport() => return self.cached_fallback(request, err),
            Err(err) => return Err(err),
        };

        self.download_all(request, &info)
    }
}
