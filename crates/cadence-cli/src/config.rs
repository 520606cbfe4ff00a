use cadence_github::{DEFAULT_API_URL, DEFAULT_OWNER, DEFAULT_REPO};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "cadence", about = "Fetch a repository's commit times as a series")]
pub struct Config {
    /// Repository owner on the forge
    #[arg(long, default_value = DEFAULT_OWNER)]
    pub owner: String,

    /// Repository name
    #[arg(long, default_value = DEFAULT_REPO)]
    pub repo: String,

    /// API root URL (point this at a mock server for testing)
    #[arg(long, env = "CADENCE_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Print the timestamps as a JSON array instead of the text summary
    #[arg(long)]
    pub json: bool,
}
