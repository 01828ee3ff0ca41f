//! Auth subcommand implementations.

mod check;
mod login;
mod logout;
mod refresh;
mod whoami;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::Settings;

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Log in with a username and password
    Login(login::LoginArgs),

    /// End the session and forget the stored tokens
    Logout(logout::LogoutArgs),

    /// Display the logged-in user
    Whoami(whoami::WhoamiArgs),

    /// Exit non-zero unless the stored session is still valid
    Check(check::CheckArgs),

    /// Exchange the refresh token for a new token pair
    Refresh(refresh::RefreshArgs),
}

pub async fn handle(settings: &Settings, cmd: AuthCommand) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Login(args) => login::run(settings, args).await,
        AuthSubcommand::Logout(args) => logout::run(settings, args).await,
        AuthSubcommand::Whoami(args) => whoami::run(settings, args).await,
        AuthSubcommand::Check(args) => check::run(settings, args).await,
        AuthSubcommand::Refresh(args) => refresh::run(settings, args).await,
    }
}
