use cadence_core::{parse_commit_time, CommitTimes};
use serde::Deserialize;
use tracing::info;

use crate::error::FetchError;

/// Public REST root of the forge.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Repository reported on when the caller names none.
pub const DEFAULT_OWNER: &str = "mutagen-io";
pub const DEFAULT_REPO: &str = "mutagen";

/// Sent with every request; the forge rejects anonymous requests without one.
const USER_AGENT: &str = "cadence-github";

/// Client for a forge's repository-commits endpoint.
///
/// Unauthenticated, so calls are subject to the forge's anonymous rate
/// limits. Each call is one outbound GET with no query parameters: the
/// forge's default page of commits, newest first. No retries, no caching,
/// and no request timeout, so a hung connection blocks until the peer
/// gives up. Calling twice performs two independent requests.
#[derive(Debug)]
pub struct GitHubClient {
    base_url: String,
    client: reqwest::Client,
}

impl GitHubClient {
    /// Client against the public API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Client against an alternative API root (a test server, a proxy, an
    /// enterprise host).
    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to build HTTP client");
        Self { base_url, client }
    }

    fn commits_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{owner}/{repo}/commits", self.base_url)
    }

    /// Author timestamps of the repository's most recent commits, in
    /// response order.
    ///
    /// The whole pipeline per invocation: one GET, status check, JSON
    /// decode, projection of each record's `commit.author.date`, timestamp
    /// parsing. On success the series has exactly one entry per commit
    /// record in the response; on any failure no partial series is
    /// returned.
    pub async fn commit_times(&self, owner: &str, repo: &str) -> Result<CommitTimes, FetchError> {
        let url = self.commits_url(owner, repo);
        let body = self.fetch(&url).await?;
        let records = decode_commits(&url, &body)?;
        let times = to_commit_times(&records)?;
        info!("fetched {} commit times for {owner}/{repo}", times.len());
        Ok(times)
    }

    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        resp.text().await.map_err(|e| FetchError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Author timestamps of the default repository's recent commits.
///
/// The single-call form: default client, default repository, one request.
pub async fn load_commit_times() -> Result<CommitTimes, FetchError> {
    GitHubClient::new()
        .commit_times(DEFAULT_OWNER, DEFAULT_REPO)
        .await
}

/// Two decode stages so a non-JSON body and JSON of the wrong shape are
/// reported apart.
fn decode_commits(url: &str, body: &str) -> Result<Vec<CommitRecord>, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| FetchError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    serde_json::from_value(value).map_err(|e| FetchError::Schema {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Parse every record's author date, keeping response order. The first bad
/// date fails the whole conversion; no partial series.
fn to_commit_times(records: &[CommitRecord]) -> Result<CommitTimes, FetchError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            parse_commit_time(&record.commit.author.date)
                .map_err(|source| FetchError::TimestampParse { index, source })
        })
        .collect()
}

// Commits endpoint response shape. Only the `commit.author.date` path is
// modeled; serde ignores the rest of the payload.

#[derive(Debug, Deserialize)]
struct CommitRecord {
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    author: CommitAuthor,
}

#[derive(Debug, Deserialize)]
struct CommitAuthor {
    date: String,
}
