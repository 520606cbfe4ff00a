use cadence_core::CommitTimes;
use tokio::runtime::Runtime;

use crate::client::{GitHubClient, DEFAULT_OWNER, DEFAULT_REPO};
use crate::error::FetchError;

/// Blocking wrapper around the async `GitHubClient`.
///
/// Creates an internal tokio runtime and uses `block_on()` for each call.
/// Designed for sync callers: the fetch becomes one blocking call that
/// returns when the response has arrived or the connection has failed.
pub struct BlockingClient {
    inner: GitHubClient,
    rt: Runtime,
}

impl BlockingClient {
    pub fn new() -> Self {
        Self {
            inner: GitHubClient::new(),
            rt: Runtime::new().expect("failed to create tokio runtime"),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            inner: GitHubClient::with_base_url(base_url),
            rt: Runtime::new().expect("failed to create tokio runtime"),
        }
    }

    pub fn commit_times(&self, owner: &str, repo: &str) -> Result<CommitTimes, FetchError> {
        self.rt.block_on(self.inner.commit_times(owner, repo))
    }

    /// Author timestamps of the default repository's recent commits.
    pub fn load_commit_times(&self) -> Result<CommitTimes, FetchError> {
        self.commit_times(DEFAULT_OWNER, DEFAULT_REPO)
    }
}
