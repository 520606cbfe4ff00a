mod config;

use anyhow::Result;
use cadence_core::CommitTimes;
use cadence_github::GitHubClient;
use clap::Parser;
use tracing::info;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    info!("fetching commits for {}/{}", config.owner, config.repo);

    let client = GitHubClient::with_base_url(&config.api_url);
    let times = client.commit_times(&config.owner, &config.repo).await?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&times)?);
    } else {
        print_summary(&config, &times);
    }

    Ok(())
}

fn print_summary(config: &Config, times: &CommitTimes) {
    println!(
        "{}/{}: {} commits on the latest page",
        config.owner,
        config.repo,
        times.len()
    );
    if let (Some(newest), Some(oldest)) = (times.newest(), times.oldest()) {
        println!("newest: {newest}");
        println!("oldest: {oldest}");
    }
    if let Some(span) = times.span() {
        println!("span:   {} days", span.num_days());
    }

    let days = times.counts_by_day();
    if days.is_empty() {
        return;
    }
    println!();
    for (day, count) in days {
        println!("{day}  {count:>4}  {}", "#".repeat(count));
    }
}
