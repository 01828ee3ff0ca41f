//! jobdesk-http - REST client for the job portal API.
//!
//! [`HttpAuthApi`] is the HTTP collaborator plugged into
//! [`SessionManager`](jobdesk_core::SessionManager); [`ReviewApi`] covers the
//! admin review endpoints once a session is authenticated.

mod auth;
mod client;
mod endpoints;
mod review;

pub use auth::HttpAuthApi;
pub use client::{ApiClient, DEFAULT_TIMEOUT};
pub use review::{
    Acknowledgement, BULK_REJECT_REASON, JobStats, ListQuery, Page, REJECT_REASON, ReviewApi,
};
