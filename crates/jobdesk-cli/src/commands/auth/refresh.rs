//! Refresh command implementation.
//!
//! The stored access token is not validated before the exchange; it is
//! usually the reason for refreshing.

use anyhow::{Context, Result, bail};
use clap::Args;

use jobdesk_core::TokenStore;

use crate::config::Settings;
use crate::output;
use crate::session::{NO_SESSION, storage};

#[derive(Args, Debug)]
pub struct RefreshArgs {}

pub async fn run(settings: &Settings, _args: RefreshArgs) -> Result<()> {
    let session = storage::open(settings)?;

    if session
        .store()
        .load()
        .context("Failed to read session")?
        .is_none()
    {
        bail!(NO_SESSION);
    }

    output::note("Refreshing session...");

    session
        .refresh_tokens()
        .await
        .context("Failed to refresh session")?;

    if !session.check_auth().await {
        bail!("The refreshed session was not accepted. Run 'jobdesk auth login' again.");
    }

    output::success("Session refreshed successfully");
    if let Some(user) = session.state().user() {
        output::field("User", &user.username);
    }

    Ok(())
}
