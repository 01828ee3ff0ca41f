//! Admin review endpoints.
//!
//! These are thin pass-throughs: paging, filtering and bulk batching are
//! all done by the server. Job records stay opaque JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use jobdesk_core::{AccessToken, Result};

use crate::client::ApiClient;
use crate::endpoints::*;

/// Reason sent when a single job is rejected without one.
pub const REJECT_REASON: &str = "Rejected by admin";

/// Reason sent when a batch is rejected without one.
pub const BULK_REJECT_REASON: &str = "Bulk rejected by admin";

/// Queue counters from `/admin/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobStats {
    pub total_raw: u64,
    pub total_pending: u64,
    pub total_approved: u64,
    pub total_rejected: u64,
    #[serde(default)]
    pub jobs_by_source: BTreeMap<String, u64>,
    pub jobs_today: u64,
    pub jobs_this_week: u64,
}

/// Paging and filter parameters for the review queues.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
    /// Free-text search over title and company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
            q: None,
            source: None,
        }
    }
}

/// One page of a review queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub data: Vec<serde_json::Value>,
}

impl Page {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Server reply to an approve or reject call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Authenticated client for the review console.
#[derive(Debug, Clone)]
pub struct ReviewApi {
    client: ApiClient,
    token: AccessToken,
}

impl ReviewApi {
    /// Bind a client to the access token of an authenticated session.
    pub fn new(client: ApiClient, token: AccessToken) -> Self {
        Self { client, token }
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<JobStats> {
        debug!("Fetching review stats");
        self.client.get_authed(ADMIN_STATS, &self.token).await
    }

    /// Jobs waiting for review.
    #[instrument(skip(self))]
    pub async fn pending(&self, query: &ListQuery) -> Result<Page> {
        self.client
            .query_authed(ADMIN_PENDING, query, &self.token)
            .await
    }

    /// Jobs that were rejected.
    ///
    /// This queue cannot be filtered by source; `query.source` is not sent.
    #[instrument(skip(self))]
    pub async fn rejected(&self, query: &ListQuery) -> Result<Page> {
        if query.source.is_some() {
            debug!("Source filter does not apply to rejected jobs, dropping it");
        }
        let query = ListQuery {
            source: None,
            ..query.clone()
        };

        self.client
            .query_authed(ADMIN_REJECTED, &query, &self.token)
            .await
    }

    #[instrument(skip(self))]
    pub async fn approve(&self, job_id: &str) -> Result<Acknowledgement> {
        let request = ApproveRequest { job_id };
        self.client
            .post_json_authed(ADMIN_APPROVE, &request, &self.token)
            .await
    }

    /// Reject one job. `None` sends [`REJECT_REASON`].
    #[instrument(skip(self))]
    pub async fn reject(&self, job_id: &str, reason: Option<&str>) -> Result<Acknowledgement> {
        let request = RejectRequest {
            job_id,
            reason: reason.unwrap_or(REJECT_REASON),
        };
        self.client
            .post_json_authed(ADMIN_REJECT, &request, &self.token)
            .await
    }

    #[instrument(skip(self), fields(count = job_ids.len()))]
    pub async fn bulk_approve(&self, job_ids: &[String]) -> Result<Acknowledgement> {
        let request = BulkApproveRequest { job_ids };
        self.client
            .post_json_authed(ADMIN_BULK_APPROVE, &request, &self.token)
            .await
    }

    /// Reject a batch of jobs. `None` sends [`BULK_REJECT_REASON`].
    #[instrument(skip(self), fields(count = job_ids.len()))]
    pub async fn bulk_reject(
        &self,
        job_ids: &[String],
        reason: Option<&str>,
    ) -> Result<Acknowledgement> {
        let request = BulkRejectRequest {
            job_ids,
            reason: reason.unwrap_or(BULK_REJECT_REASON),
        };
        self.client
            .post_json_authed(ADMIN_BULK_REJECT, &request, &self.token)
            .await
    }
}
