//! Stats command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::config::Settings;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Print the counters as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(settings: &Settings, args: StatsArgs) -> Result<()> {
    let api = session::review_api(settings).await?;
    let stats = api.stats().await.context("Failed to fetch stats")?;

    if args.json {
        return output::json(&stats, true);
    }

    output::field("Pending", &stats.total_pending.to_string());
    output::field("Approved", &stats.total_approved.to_string());
    output::field("Rejected", &stats.total_rejected.to_string());
    output::field("Scraped", &stats.total_raw.to_string());
    output::field("Today", &stats.jobs_today.to_string());
    output::field("This week", &stats.jobs_this_week.to_string());
    output::source_table(&stats.jobs_by_source);

    Ok(())
}
