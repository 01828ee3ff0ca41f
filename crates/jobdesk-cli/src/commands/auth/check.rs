//! Check command implementation.

use anyhow::{Result, bail};
use clap::Args;

use crate::config::Settings;
use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct CheckArgs {}

pub async fn run(settings: &Settings, _args: CheckArgs) -> Result<()> {
    let session = storage::open(settings)?;

    if !session.check_auth().await {
        bail!("Not logged in");
    }

    let state = session.state();
    let username = state.user().map(|u| u.username.as_str()).unwrap_or_default();
    output::success(&format!("Logged in as {}", username));

    Ok(())
}
