//! Whoami command implementation.

use anyhow::Result;
use clap::Args;

use crate::config::Settings;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// Print the user record as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(settings: &Settings, args: WhoamiArgs) -> Result<()> {
    let (session, user) = session::restore(settings).await?;

    if args.json {
        return output::json(&user, true);
    }

    output::user_fields(&user);
    output::field("API", session.api().client().base().as_str());

    Ok(())
}
