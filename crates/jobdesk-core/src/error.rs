//! Error types for jobdesk.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, API, storage, and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for jobdesk operations.
///
/// Callers that only need a message for the user should reach for
/// [`Error::detail`], which yields the server-supplied explanation when the
/// API sent one.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, malformed response).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Authentication errors (no session, unusable refresh token).
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Non-success responses from the REST API.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Durable token storage errors.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Input validation errors.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the server-supplied `detail` message, if this error carries one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Api(err) => err.detail.as_deref(),
            _ => None,
        }
    }

    /// Check if the server rejected the caller's credentials or token.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Api(err) => err.is_auth_error(),
            Error::Auth(_) => true,
            _ => false,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// The response body could not be decoded.
    #[error("unexpected response body: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No authenticated session is held.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Refresh token is missing, invalid, or expired.
    #[error("refresh token invalid")]
    RefreshTokenInvalid,
}

/// A non-success response from the REST API.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// The `detail` message from the error body, when it is a plain string.
    pub detail: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, detail: Option<String>) -> Self {
        Self { status, detail }
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

/// Durable storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The snapshot could not be read.
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    /// The snapshot could not be written or removed.
    #[error("failed to write {path}: {message}")]
    Write { path: String, message: String },

    /// The snapshot exists but does not parse.
    #[error("corrupt session snapshot at {path}: {message}")]
    Corrupt { path: String, message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },
}
