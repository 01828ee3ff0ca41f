//! Global settings shared by every command.

use std::path::PathBuf;

use clap::Args;

/// API used when neither a flag nor the session file names one.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Args, Debug, Clone)]
pub struct Settings {
    /// Base URL of the job portal API [default: http://localhost:8000]
    #[arg(long, env = "JOBDESK_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Where the session tokens are kept
    #[arg(long, env = "JOBDESK_SESSION_FILE", global = true)]
    pub session_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, env = "JOBDESK_TIMEOUT", default_value_t = 30, global = true)]
    pub timeout: u64,
}
