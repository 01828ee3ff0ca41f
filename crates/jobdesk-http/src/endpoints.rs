//! Endpoint paths and wire types.

use serde::{Deserialize, Serialize};

use jobdesk_core::{AccessToken, RefreshToken, TokenPair};

// ============================================================================
// Endpoint Paths
// ============================================================================

pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_LOGOUT: &str = "/auth/logout";
pub const AUTH_ME: &str = "/auth/me";
pub const AUTH_REFRESH: &str = "/auth/refresh";

pub const ADMIN_STATS: &str = "/admin/stats";
pub const ADMIN_PENDING: &str = "/admin/pending";
pub const ADMIN_REJECTED: &str = "/admin/rejected";
pub const ADMIN_APPROVE: &str = "/admin/approve";
pub const ADMIN_REJECT: &str = "/admin/reject";
pub const ADMIN_BULK_APPROVE: &str = "/admin/bulk-approve";
pub const ADMIN_BULK_REJECT: &str = "/admin/bulk-reject";

// ============================================================================
// Auth
// ============================================================================

/// Form body for `/auth/login` (OAuth2 password flow field names).
#[derive(Serialize)]
pub struct LoginForm<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Token response from `/auth/login` and `/auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub token_type: Option<String>,
}

impl From<TokenResponse> for TokenPair {
    fn from(response: TokenResponse) -> Self {
        TokenPair::new(
            AccessToken::new(response.access_token),
            RefreshToken::new(response.refresh_token),
        )
    }
}

/// Request body for `/auth/refresh`.
#[derive(Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

// ============================================================================
// Admin review
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ApproveRequest<'a> {
    pub job_id: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RejectRequest<'a> {
    pub job_id: &'a str,
    pub reason: &'a str,
}

#[derive(Debug, Serialize)]
pub struct BulkApproveRequest<'a> {
    pub job_ids: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct BulkRejectRequest<'a> {
    pub job_ids: &'a [String],
    pub reason: &'a str,
}

// ============================================================================
// Errors
// ============================================================================

/// Error body. `detail` is a string for most errors and a list of field
/// errors for request validation failures.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn detail_message(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(message)) => Some(message),
            _ => None,
        }
    }
}
