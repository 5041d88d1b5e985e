use super::{MetadataLookup, RepoCategory};

/// Infer the category of `repo_id` by probing each namespace in priority order.
///
/// Returns the first category whose lookup succeeds, or
/// [`RepoCategory::Unknown`] when none does. Lookup failures are expected
/// here and never reach the caller.
pub fn resolve_repo_category<L: MetadataLookup + ?Sized>(
    lookup: &L,
    repo_id: &str,
) -> RepoCategory {
    for category in RepoCategory::PROBE_ORDER {
        match lookup.lookup(repo_id, category) {
            Ok(()) => {
                tracing::debug!(repo_id, %category, "repo found");
                return category;
            }
            Err(err) => {
                tracing::debug!(repo_id, %category, error = %err, "probe missed");
            }
        }
    }

    RepoCategory::Unknown
}
