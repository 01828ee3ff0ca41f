use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// An isolated session file for one test.
pub struct TestHome {
    _dir: TempDir,
    pub session_file: PathBuf,
}

impl TestHome {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let session_file = dir.path().join("session.json");
        Self {
            _dir: dir,
            session_file,
        }
    }

    /// Write a session file by hand, as a previous login would have.
    pub fn seed(&self, api_url: &str, access: &str, refresh: &str) {
        let json = json!({
            "api_url": api_url,
            "access_token": access,
            "refresh_token": refresh,
        });
        std::fs::write(&self.session_file, json.to_string()).expect("Failed to seed session");
    }
}

/// Run the CLI binary against `api_url` with an isolated session file.
pub fn run_cli(args: &[&str], session_file: &Path, api_url: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jobdesk"));
    cmd.args(args);
    cmd.env_remove("JOBDESK_PASSWORD");
    cmd.env_remove("RUST_LOG");
    cmd.env("JOBDESK_SESSION_FILE", session_file);
    cmd.env("JOBDESK_API_URL", api_url);
    cmd.env("NO_COLOR", "1");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str], session_file: &Path, api_url: &str) -> String {
    let output = run_cli(args, session_file, api_url);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_string_contains("password=good"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "cli-access",
            "refresh_token": "cli-refresh",
            "token_type": "bearer"
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_string_contains("password=bad"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Incorrect username or password"
        })))
        .mount(server)
        .await;
}

pub async fn mount_me(server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", format!("Bearer {}", token).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "65f0c0ffee",
            "email": "admin@example.com",
            "username": "admin",
            "role": "admin",
            "is_active": true
        })))
        .mount(server)
        .await;
}
