//! Session handling for the CLI.
//!
//! Every invocation is a fresh process, so the session is rebuilt from the
//! session file each time and restored with `check_auth` before any
//! protected command runs.

pub mod storage;

use anyhow::{Context, Result};

use jobdesk_core::{SessionManager, User};
use jobdesk_file::FileTokenStore;
use jobdesk_http::{HttpAuthApi, ReviewApi};

use crate::config::Settings;

pub type CliSession = SessionManager<HttpAuthApi, FileTokenStore>;

pub const NO_SESSION: &str = "No active session. Run 'jobdesk auth login' first.";

/// Restore the stored session and pass it through the route guard.
pub async fn restore(settings: &Settings) -> Result<(CliSession, User)> {
    let session = storage::open(settings)?;
    session.check_auth().await;

    let user = session.guard().require().context(NO_SESSION)?;
    Ok((session, user))
}

/// A review client bound to the restored session's access token.
pub async fn review_api(settings: &Settings) -> Result<ReviewApi> {
    let (session, _) = restore(settings).await?;

    let token = session
        .access_token()
        .context("Failed to read session")?
        .context(NO_SESSION)?;

    Ok(ReviewApi::new(session.api().client().clone(), token))
}
