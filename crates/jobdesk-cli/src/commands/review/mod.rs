//! Review subcommand implementations.
//!
//! All of these are protected: they restore the session and go through the
//! route guard before touching the admin endpoints.

mod decide;
mod list;
mod stats;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::Settings;

#[derive(Args, Debug)]
pub struct ReviewCommand {
    #[command(subcommand)]
    pub command: ReviewSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ReviewSubcommand {
    /// Show queue counters
    Stats(stats::StatsArgs),

    /// List jobs waiting for review
    Pending(list::PendingArgs),

    /// List rejected jobs
    Rejected(list::RejectedArgs),

    /// Approve one job
    Approve(decide::ApproveArgs),

    /// Reject one job
    Reject(decide::RejectArgs),

    /// Approve several jobs at once
    BulkApprove(decide::BulkApproveArgs),

    /// Reject several jobs at once
    BulkReject(decide::BulkRejectArgs),
}

pub async fn handle(settings: &Settings, cmd: ReviewCommand) -> Result<()> {
    match cmd.command {
        ReviewSubcommand::Stats(args) => stats::run(settings, args).await,
        ReviewSubcommand::Pending(args) => list::pending(settings, args).await,
        ReviewSubcommand::Rejected(args) => list::rejected(settings, args).await,
        ReviewSubcommand::Approve(args) => decide::approve(settings, args).await,
        ReviewSubcommand::Reject(args) => decide::reject(settings, args).await,
        ReviewSubcommand::BulkApprove(args) => decide::bulk_approve(settings, args).await,
        ReviewSubcommand::BulkReject(args) => decide::bulk_reject(settings, args).await,
    }
}
