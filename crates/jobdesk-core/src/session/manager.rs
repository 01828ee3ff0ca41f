//! The session manager.

use tokio::sync::{Mutex, watch};
use tracing::{debug, info, instrument, warn};

use crate::error::{AuthError, Error};
use crate::traits::{AuthApi, TokenStore};
use crate::types::User;
use crate::{AccessToken, Credentials, Result};

use super::{RouteGuard, SessionState};

/// Shown when a login fails without a server-supplied explanation.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";

/// Owns the authentication state of the admin console.
///
/// The manager is an explicit context object: construct one at startup,
/// wrap it in an `Arc` and hand it to whatever needs it. State starts out
/// unauthenticated; call [`check_auth`](Self::check_auth) once to restore a
/// session persisted by an earlier run.
///
/// State changes are published on a `watch` channel, so views can either
/// poll [`state`](Self::state) or [`subscribe`](Self::subscribe) to changes.
///
/// # Overlapping calls
///
/// `login`, `check_auth`, `logout` and `refresh_tokens` take an internal
/// async lock and run one at a time, in the order they were called. A later
/// call therefore always observes the tokens and state left by the earlier
/// one. `clear_error` and the read accessors do not wait for the lock.
pub struct SessionManager<A, S> {
    api: A,
    store: S,
    state: watch::Sender<SessionState>,
    op_lock: Mutex<()>,
}

impl<A, S> SessionManager<A, S>
where
    A: AuthApi,
    S: TokenStore,
{
    /// Create an unauthenticated session manager.
    pub fn new(api: A, store: S) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            api,
            store,
            state,
            op_lock: Mutex::new(()),
        }
    }

    /// Authenticate with username and password.
    ///
    /// Returns `true` on success. On failure the session is left
    /// unauthenticated with [`SessionState::error`] set; stored tokens from
    /// an earlier session are not touched. Retrying is always safe.
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    pub async fn login(&self, credentials: Credentials) -> bool {
        let _op = self.op_lock.lock().await;
        info!("Logging in");

        self.state.send_modify(|s| {
            s.is_loading = true;
            s.error = None;
        });

        match self.authenticate(&credentials).await {
            Ok(user) => {
                info!(role = %user.role, "Logged in");
                self.state.send_modify(|s| s.sign_in(user));
                true
            }
            Err(err) => {
                info!(error = %err, "Login failed");
                let message = failure_message(&err);
                self.state.send_modify(|s| {
                    s.sign_out();
                    s.error = Some(message);
                });
                false
            }
        }
    }

    // The identity is fetched with the new access token before anything is
    // persisted, so a failure at any step leaves the store as it was.
    async fn authenticate(&self, credentials: &Credentials) -> Result<User> {
        let tokens = self.api.login(credentials).await?;
        let user = self.api.me(&tokens.access_token).await?;
        self.store.save(&tokens)?;
        Ok(user)
    }

    /// Validate the persisted session, if there is one.
    ///
    /// Without a stored access token this returns `false` without touching
    /// the network. A stored token the server no longer accepts is discarded
    /// silently: both slots are cleared and no error is reported.
    #[instrument(skip(self))]
    pub async fn check_auth(&self) -> bool {
        let _op = self.op_lock.lock().await;

        let tokens = match self.store.load() {
            Ok(Some(tokens)) => tokens,
            Ok(None) => {
                debug!("No stored session");
                self.state.send_modify(|s| s.sign_out());
                return false;
            }
            Err(err) => {
                warn!(error = %err, "Stored session is unreadable, discarding it");
                self.discard_tokens();
                self.state.send_modify(|s| s.sign_out());
                return false;
            }
        };

        self.state.send_modify(|s| s.is_loading = true);

        match self.api.me(&tokens.access_token).await {
            Ok(user) => {
                debug!(username = %user.username, "Stored session is valid");
                self.state.send_modify(|s| s.sign_in(user));
                true
            }
            Err(err) => {
                info!(error = %err, "Stored session is no longer valid");
                self.discard_tokens();
                self.state.send_modify(|s| {
                    s.sign_out();
                    s.error = None;
                });
                false
            }
        }
    }

    /// Log out locally, telling the server if it can be reached.
    ///
    /// The server call is best-effort. Whatever it returns, the stored
    /// tokens are removed and the session ends up unauthenticated.
    #[instrument(skip(self))]
    pub async fn logout(&self) {
        let _op = self.op_lock.lock().await;
        info!("Logging out");

        let token = self
            .store
            .load()
            .ok()
            .flatten()
            .map(|tokens| tokens.access_token);

        if let Err(err) = self.api.logout(token.as_ref()).await {
            debug!(error = %err, "Server-side logout failed, ignoring");
        }

        self.discard_tokens();
        self.state.send_modify(|s| {
            s.sign_out();
            s.error = None;
        });
    }

    /// Dismiss the last error message.
    pub fn clear_error(&self) {
        self.state.send_modify(|s| s.error = None);
    }

    /// Exchange the stored refresh token for a new token pair.
    ///
    /// The session state is not changed. On failure the stored pair is left
    /// as it was and the error is returned.
    #[instrument(skip(self))]
    pub async fn refresh_tokens(&self) -> Result<()> {
        let _op = self.op_lock.lock().await;
        info!("Refreshing tokens");

        let tokens = self.store.load()?.ok_or(AuthError::RefreshTokenInvalid)?;
        let fresh = self.api.refresh(&tokens.refresh_token).await?;
        self.store.save(&fresh)?;

        debug!("Tokens refreshed");
        Ok(())
    }

    /// A copy of the current state.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receive every state change from now on.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// A route guard bound to this session.
    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(self.subscribe())
    }

    /// The access token backing the current session, for authenticated
    /// API calls. `None` unless the session is authenticated.
    pub fn access_token(&self) -> Result<Option<AccessToken>> {
        if !self.state.borrow().is_authenticated() {
            return Ok(None);
        }
        Ok(self.store.load()?.map(|tokens| tokens.access_token))
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn discard_tokens(&self) {
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "Failed to clear stored tokens");
        }
    }
}

impl<A, S> std::fmt::Debug for SessionManager<A, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("state", &*self.state.borrow())
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}

fn failure_message(err: &Error) -> String {
    err.detail()
        .filter(|detail| !detail.is_empty())
        .unwrap_or(LOGIN_FAILED_MESSAGE)
        .to_string()
}
