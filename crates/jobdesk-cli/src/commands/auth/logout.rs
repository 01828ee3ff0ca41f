//! Logout command implementation.

use anyhow::Result;
use clap::Args;

use crate::config::Settings;
use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(settings: &Settings, _args: LogoutArgs) -> Result<()> {
    let session = storage::open(settings)?;

    output::note("Logging out...");
    session.logout().await;

    output::success("Logged out");
    Ok(())
}
