#![allow(dead_code)]

use hubsnap::hf::RepoCategory;
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

use crate::common::ProbeFailure;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Any subset of the probed namespaces.
pub fn arb_namespaces() -> impl Strategy<Value = Vec<RepoCategory>> {
    proptest::sample::subsequence(RepoCategory::PROBE_ORDER.to_vec(), 0..=3)
}

pub fn arb_probe_failure() -> impl Strategy<Value = ProbeFailure> {
    prop_oneof![
        Just(ProbeFailure::NotFound),
        Just(ProbeFailure::Unauthorized),
        Just(ProbeFailure::ServerError),
    ]
}

/// Repo ids in the shapes the hub uses: bare names and `owner/name`.
pub fn arb_repo_id() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9-]{0,15}",
        "[a-z][a-z0-9-]{0,10}/[A-Za-z0-9._-]{1,20}",
    ]
}
