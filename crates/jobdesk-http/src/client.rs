//! HTTP client for the REST API.

use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use jobdesk_core::error::{ApiError, Error, TransportError};
use jobdesk_core::{AccessToken, ApiUrl, Result};

use crate::endpoints::ErrorBody;

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client bound to one API base URL.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base: ApiUrl,
}

impl ApiClient {
    /// Create a client with the given request timeout.
    pub fn new(base: ApiUrl, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("jobdesk/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(map_reqwest)?;

        Ok(Self { client, base })
    }

    /// Returns the base URL this client is configured for.
    pub fn base(&self) -> &ApiUrl {
        &self.base
    }

    /// Authenticated GET.
    #[instrument(skip(self, token), fields(api = %self.base))]
    pub async fn get_authed<R>(&self, path: &str, token: &AccessToken) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(path);
        debug!(path, "GET");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(map_reqwest)?;

        self.handle_response(response).await
    }

    /// Authenticated GET with query parameters.
    #[instrument(skip(self, token), fields(api = %self.base))]
    pub async fn query_authed<Q, R>(&self, path: &str, params: &Q, token: &AccessToken) -> Result<R>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(path);
        debug!(path, "GET");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(&url)
            .query(params)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(map_reqwest)?;

        self.handle_response(response).await
    }

    /// Unauthenticated form-encoded POST.
    ///
    /// The body is skipped from tracing because it may hold a password.
    #[instrument(skip(self, form), fields(api = %self.base))]
    pub async fn post_form<B, R>(&self, path: &str, form: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(path);
        debug!(path, "POST (form)");

        let response = self
            .client
            .post(&url)
            .form(form)
            .send()
            .await
            .map_err(map_reqwest)?;

        self.handle_response(response).await
    }

    /// Unauthenticated JSON POST.
    #[instrument(skip(self, body), fields(api = %self.base))]
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(path);
        debug!(path, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest)?;

        self.handle_response(response).await
    }

    /// Authenticated JSON POST.
    #[instrument(skip(self, token), fields(api = %self.base))]
    pub async fn post_json_authed<B, R>(&self, path: &str, body: &B, token: &AccessToken) -> Result<R>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(path);
        debug!(path, "authenticated POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(map_reqwest)?;

        self.handle_response(response).await
    }

    /// POST with no body whose response body is ignored.
    /// Used for endpoints like logout.
    #[instrument(skip(self, token), fields(api = %self.base))]
    pub async fn post_empty(&self, path: &str, token: Option<&AccessToken>) -> Result<()> {
        let url = self.base.endpoint(path);
        debug!(path, "POST (no body)");

        let mut request = self.client.post(&url);
        if let Some(token) = token {
            request = request.bearer_auth(token.as_str());
        }

        let response = request.send().await.map_err(map_reqwest)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Error::Api(self.parse_error_response(response).await))
        }
    }

    async fn handle_response<R: DeserializeOwned>(&self, response: reqwest::Response) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            response.json::<R>().await.map_err(map_reqwest)
        } else {
            Err(Error::Api(self.parse_error_response(response).await))
        }
    }

    async fn parse_error_response(&self, response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        // FastAPI sends `{"detail": "..."}`, but validation failures carry a
        // list there and proxies may send HTML. Only a string is surfaced.
        match response.json::<ErrorBody>().await {
            Ok(body) => ApiError::new(status, body.detail_message()),
            Err(_) => ApiError::new(status, None),
        }
    }
}

fn map_reqwest(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransportError::Decode {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}
