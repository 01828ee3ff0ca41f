//! Mock API tests for the HTTP client and the session lifecycle.
//!
//! These tests use wiremock to simulate the job portal API and drive a real
//! `SessionManager` over HTTP without network access or real credentials.

use jobdesk_core::error::Error;
use jobdesk_core::{
    AccessToken, ApiUrl, AuthApi, Credentials, MemoryTokenStore, RefreshToken, SessionManager,
    TokenPair, TokenStore,
};
use jobdesk_http::{HttpAuthApi, ListQuery, ReviewApi};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_api(server: &MockServer) -> HttpAuthApi {
    HttpAuthApi::new(ApiUrl::new(server.uri()).unwrap()).unwrap()
}

fn pair(access: &str, refresh: &str) -> TokenPair {
    TokenPair::new(AccessToken::new(access), RefreshToken::new(refresh))
}

async fn mount_login_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=admin"))
        .and(body_string_contains("password=good"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "test-access-token",
            "refresh_token": "test-refresh-token",
            "token_type": "bearer"
        })))
        .mount(server)
        .await;
}

async fn mount_me(server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", format!("Bearer {}", token).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "65f0c0ffee",
            "email": "admin@example.com",
            "username": "admin",
            "full_name": null,
            "role": "admin",
            "is_active": true,
            "created_at": "2024-03-01T12:00:00Z",
            "last_login": "2024-03-02T08:30:00Z"
        })))
        .mount(server)
        .await;
}

async fn mount_me_expired(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Could not validate credentials"
        })))
        .mount(server)
        .await;
}

// ============================================================================
// Session Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_login_success() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    mount_me(&server, "test-access-token").await;

    let session = SessionManager::new(mock_api(&server), MemoryTokenStore::new());
    assert!(session.login(Credentials::new("admin", "good")).await);

    let state = session.state();
    assert!(state.is_authenticated());
    assert_eq!(state.user().unwrap().username, "admin");
    assert_eq!(state.user().unwrap().role, "admin");
    assert_eq!(
        session.store().load().unwrap(),
        Some(pair("test-access-token", "test-refresh-token"))
    );
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Invalid credentials"
        })))
        .mount(&server)
        .await;

    let before = pair("old-access", "old-refresh");
    let session = SessionManager::new(
        mock_api(&server),
        MemoryTokenStore::with_tokens(before.clone()),
    );

    assert!(!session.login(Credentials::new("u", "bad")).await);

    let state = session.state();
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
    assert_eq!(state.error(), Some("Invalid credentials"));
    assert_eq!(session.store().load().unwrap(), Some(before));
}

#[tokio::test]
async fn test_login_server_error_uses_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let session = SessionManager::new(mock_api(&server), MemoryTokenStore::new());
    assert!(!session.login(Credentials::new("admin", "good")).await);
    assert_eq!(
        session.state().error(),
        Some("Login failed. Please try again.")
    );
}

#[tokio::test]
async fn test_check_auth_without_token_makes_no_request() {
    let server = MockServer::start().await;
    mount_me(&server, "test-access-token").await;

    let session = SessionManager::new(mock_api(&server), MemoryTokenStore::new());
    assert!(!session.check_auth().await);
    assert!(!session.state().is_authenticated());

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_check_auth_restores_session() {
    let server = MockServer::start().await;
    mount_me(&server, "stored-access").await;

    let session = SessionManager::new(
        mock_api(&server),
        MemoryTokenStore::with_tokens(pair("stored-access", "stored-refresh")),
    );

    assert!(session.check_auth().await);
    assert_eq!(session.state().user().unwrap().username, "admin");
}

#[tokio::test]
async fn test_check_auth_expired_token_clears_store() {
    let server = MockServer::start().await;
    mount_me_expired(&server).await;

    let session = SessionManager::new(
        mock_api(&server),
        MemoryTokenStore::with_tokens(pair("expired-access", "stored-refresh")),
    );

    assert!(!session.check_auth().await);
    let state = session.state();
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
    assert!(state.error().is_none());
    assert!(session.store().load().unwrap().is_none());
}

#[tokio::test]
async fn test_logout_sends_bearer_and_clears() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    mount_me(&server, "test-access-token").await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .and(header("authorization", "Bearer test-access-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let session = SessionManager::new(mock_api(&server), MemoryTokenStore::new());
    session.login(Credentials::new("admin", "good")).await;

    session.logout().await;

    assert!(!session.state().is_authenticated());
    assert!(session.store().load().unwrap().is_none());
}

#[tokio::test]
async fn test_logout_survives_missing_endpoint() {
    let server = MockServer::start().await;
    mount_me(&server, "stored-access").await;
    // No /auth/logout mock: wiremock answers 404.

    let session = SessionManager::new(
        mock_api(&server),
        MemoryTokenStore::with_tokens(pair("stored-access", "stored-refresh")),
    );
    assert!(session.check_auth().await);

    session.logout().await;

    let state = session.state();
    assert!(!state.is_authenticated());
    assert!(state.error().is_none());
    assert!(session.store().load().unwrap().is_none());
}

#[tokio::test]
async fn test_logout_survives_unreachable_server() {
    let server = MockServer::start().await;
    let api = mock_api(&server);
    drop(server);

    let session = SessionManager::new(
        api,
        MemoryTokenStore::with_tokens(pair("stored-access", "stored-refresh")),
    );

    session.logout().await;

    assert!(!session.state().is_authenticated());
    assert!(session.store().load().unwrap().is_none());
}

#[tokio::test]
async fn test_refresh_tokens() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_json(json!({ "refresh_token": "old-refresh" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "new-access",
            "refresh_token": "new-refresh",
            "token_type": "bearer"
        })))
        .mount(&server)
        .await;

    let session = SessionManager::new(
        mock_api(&server),
        MemoryTokenStore::with_tokens(pair("old-access", "old-refresh")),
    );

    session.refresh_tokens().await.unwrap();
    assert_eq!(
        session.store().load().unwrap(),
        Some(pair("new-access", "new-refresh"))
    );
}

#[tokio::test]
async fn test_refresh_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Invalid or expired refresh token"
        })))
        .mount(&server)
        .await;

    let api = mock_api(&server);
    let err = api
        .refresh(&RefreshToken::new("expired"))
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
    assert_eq!(err.detail(), Some("Invalid or expired refresh token"));
}

#[tokio::test]
async fn test_validation_error_detail_is_not_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{ "loc": ["body", "username"], "msg": "field required", "type": "missing" }]
        })))
        .mount(&server)
        .await;

    let err = mock_api(&server)
        .login(&Credentials::new("", ""))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Api(ref api) if api.status == 422));
    assert_eq!(err.detail(), None);
}

// ============================================================================
// Review API Tests
// ============================================================================

fn review_api(server: &MockServer) -> ReviewApi {
    ReviewApi::new(
        mock_api(server).client().clone(),
        AccessToken::new("review-token"),
    )
}

#[tokio::test]
async fn test_stats() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/stats"))
        .and(header("authorization", "Bearer review-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_raw": 120,
            "total_pending": 14,
            "total_approved": 90,
            "total_rejected": 16,
            "jobs_by_source": { "remoteok": 60, "arbeitnow": 30 },
            "jobs_today": 5,
            "jobs_this_week": 31
        })))
        .mount(&server)
        .await;

    let stats = review_api(&server).stats().await.unwrap();
    assert_eq!(stats.total_pending, 14);
    assert_eq!(stats.jobs_by_source.get("remoteok"), Some(&60));
}

#[tokio::test]
async fn test_pending_passes_query_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/pending"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "5"))
        .and(query_param("q", "rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 2,
            "per_page": 5,
            "total": 7,
            "total_pages": 2,
            "data": [
                { "_id": "job-6", "title": "Rust Engineer" },
                { "_id": "job-7", "title": "Rust Developer" }
            ]
        })))
        .mount(&server)
        .await;

    let query = ListQuery {
        page: 2,
        per_page: 5,
        q: Some("rust".to_string()),
        source: None,
    };
    let page = review_api(&server).pending(&query).await.unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0]["title"], "Rust Engineer");
    assert!(!page.has_next());
}

#[tokio::test]
async fn test_rejected_never_sends_source() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/rejected"))
        .and(query_param("q", "rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "per_page": 20,
            "total": 0,
            "total_pages": 0,
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = ListQuery {
        q: Some("rust".to_string()),
        source: Some("remotive".to_string()),
        ..ListQuery::default()
    };
    review_api(&server).rejected(&query).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].url.query_pairs().any(|(key, _)| key == "source"));
}

#[tokio::test]
async fn test_reject_uses_default_reason() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/reject"))
        .and(body_json(json!({ "job_id": "job-1", "reason": "Rejected by admin" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Job rejected successfully"
        })))
        .mount(&server)
        .await;

    let ack = review_api(&server).reject("job-1", None).await.unwrap();
    assert_eq!(ack.message, "Job rejected successfully");
}

#[tokio::test]
async fn test_bulk_approve() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/bulk-approve"))
        .and(body_json(json!({ "job_ids": ["job-1", "job-2"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Bulk approval completed",
            "data": { "success": 2, "not_found": 0, "errors": 0 }
        })))
        .mount(&server)
        .await;

    let ids = vec!["job-1".to_string(), "job-2".to_string()];
    let ack = review_api(&server).bulk_approve(&ids).await.unwrap();
    assert_eq!(ack.data.unwrap()["success"], 2);
}

#[tokio::test]
async fn test_review_with_expired_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/approve"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Could not validate credentials"
        })))
        .mount(&server)
        .await;

    let err = review_api(&server).approve("job-1").await.unwrap_err();
    assert!(err.is_auth_error());
}
