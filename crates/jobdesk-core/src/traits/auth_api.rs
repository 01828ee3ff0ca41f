//! HTTP collaborator trait.

use async_trait::async_trait;

use crate::types::User;
use crate::{AccessToken, Credentials, RefreshToken, Result, TokenPair};

/// The `/auth/*` surface of the REST API.
///
/// Timeouts, if any, belong to the implementation; the session manager
/// never cancels a call.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a token pair (`POST /auth/login`).
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair>;

    /// End the server-side session (`POST /auth/logout`).
    async fn logout(&self, token: Option<&AccessToken>) -> Result<()>;

    /// Fetch the identity record for a token (`GET /auth/me`).
    async fn me(&self, token: &AccessToken) -> Result<User>;

    /// Exchange a refresh token for a new pair (`POST /auth/refresh`).
    async fn refresh(&self, refresh_token: &RefreshToken) -> Result<TokenPair>;
}
