mod blocking;
mod client;
mod error;

pub use blocking::BlockingClient;
pub use client::{
    load_commit_times, GitHubClient, DEFAULT_API_URL, DEFAULT_OWNER, DEFAULT_REPO,
};
pub use error::FetchError;
