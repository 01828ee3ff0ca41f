//! Login command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use jobdesk_core::Credentials;
use jobdesk_core::session::LOGIN_FAILED_MESSAGE;

use crate::config::Settings;
use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Admin username
    #[arg(long, short)]
    pub username: String,

    /// Account password
    #[arg(long, env = "JOBDESK_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run(settings: &Settings, args: LoginArgs) -> Result<()> {
    let session = storage::open(settings)?;
    let credentials = Credentials::new(&args.username, &args.password);

    output::note("Logging in...");

    if !session.login(credentials).await {
        let state = session.state();
        bail!("{}", state.error().unwrap_or(LOGIN_FAILED_MESSAGE));
    }

    let state = session.state();
    let user = state.user().context("Login did not produce a user")?;

    output::success("Logged in successfully");
    println!();
    output::user_fields(user);
    output::field("API", session.api().client().base().as_str());

    Ok(())
}
