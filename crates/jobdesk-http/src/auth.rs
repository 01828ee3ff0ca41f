//! HTTP implementation of the `/auth` surface.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use jobdesk_core::traits::AuthApi;
use jobdesk_core::{AccessToken, ApiUrl, Credentials, RefreshToken, Result, TokenPair, User};

use crate::client::{ApiClient, DEFAULT_TIMEOUT};
use crate::endpoints::*;

/// The REST API's authentication endpoints.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: ApiClient,
}

impl HttpAuthApi {
    /// Create an auth client with the default request timeout.
    pub fn new(base: ApiUrl) -> Result<Self> {
        Self::with_timeout(base, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base: ApiUrl, timeout: Duration) -> Result<Self> {
        Ok(Self::from_client(ApiClient::new(base, timeout)?))
    }

    /// Build on an existing client, sharing its connection pool.
    pub fn from_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// The underlying client, for building a [`ReviewApi`](crate::ReviewApi).
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair> {
        let form = LoginForm {
            username: credentials.username(),
            password: credentials.password(),
        };

        let response: TokenResponse = self.client.post_form(AUTH_LOGIN, &form).await?;
        debug!("Token pair issued");
        Ok(response.into())
    }

    #[instrument(skip(self, token))]
    async fn logout(&self, token: Option<&AccessToken>) -> Result<()> {
        self.client.post_empty(AUTH_LOGOUT, token).await
    }

    #[instrument(skip(self, token))]
    async fn me(&self, token: &AccessToken) -> Result<User> {
        self.client.get_authed(AUTH_ME, token).await
    }

    #[instrument(skip(self, refresh_token))]
    async fn refresh(&self, refresh_token: &RefreshToken) -> Result<TokenPair> {
        let request = RefreshRequest {
            refresh_token: refresh_token.as_str(),
        };

        let response: TokenResponse = self.client.post_json(AUTH_REFRESH, &request).await?;
        Ok(response.into())
    }
}
