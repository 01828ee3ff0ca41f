//! Route guard for protected views.

use tokio::sync::watch;

use crate::error::AuthError;
use crate::types::User;
use crate::Result;

use super::SessionState;

/// The login entry point unauthenticated users are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of a guard check.
#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    /// Render the protected view for this user.
    Granted(User),
    /// Do not render; go to this path instead.
    Redirect(&'static str),
}

/// Read-only gate consulted before rendering a protected view.
///
/// The guard only reads the session state published by the
/// [`SessionManager`](super::SessionManager); it never performs network calls.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    state: watch::Receiver<SessionState>,
}

impl RouteGuard {
    pub fn new(state: watch::Receiver<SessionState>) -> Self {
        Self { state }
    }

    /// Decide whether a protected view may render.
    pub fn admit(&self) -> Access {
        match self.state.borrow().user() {
            Some(user) => Access::Granted(user.clone()),
            None => Access::Redirect(LOGIN_PATH),
        }
    }

    /// Like [`admit`](Self::admit), but as a `Result` for command-style callers.
    pub fn require(&self) -> Result<User> {
        match self.admit() {
            Access::Granted(user) => Ok(user),
            Access::Redirect(_) => Err(AuthError::NotAuthenticated.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }
}
