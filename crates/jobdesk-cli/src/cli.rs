//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::auth::AuthCommand;
use crate::commands::review::ReviewCommand;
use crate::config::Settings;

/// Admin review console for the job portal.
#[derive(Parser, Debug)]
#[command(name = "jobdesk")]
#[command(author, version = env!("JOBDESK_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub settings: Settings,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the admin session
    Auth(AuthCommand),

    /// Review scraped jobs (requires a session)
    Review(ReviewCommand),
}
