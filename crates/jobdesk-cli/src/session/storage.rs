//! Session file location and session assembly.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

use jobdesk_core::{ApiUrl, SessionManager};
use jobdesk_file::FileTokenStore;
use jobdesk_http::HttpAuthApi;

use super::CliSession;
use crate::config::{DEFAULT_API_URL, Settings};

/// Get the session file path.
pub fn session_path(settings: &Settings) -> Result<PathBuf> {
    if let Some(path) = &settings.session_file {
        return Ok(path.clone());
    }

    let dirs = ProjectDirs::from("", "", "jobdesk").context("Could not determine data directory")?;
    Ok(dirs.data_dir().join("session.json"))
}

/// Build the session manager for this invocation.
///
/// The API is taken from `--api-url`, then from the session file, then
/// [`DEFAULT_API_URL`].
pub fn open(settings: &Settings) -> Result<CliSession> {
    let path = session_path(settings)?;
    let store = FileTokenStore::new(&path);

    let api_url = match &settings.api_url {
        Some(url) => ApiUrl::new(url).context("Invalid API URL")?,
        // A corrupt file is dealt with by check_auth; fall back here.
        None => match store.stored_api_url() {
            Ok(Some(url)) => url,
            _ => ApiUrl::new(DEFAULT_API_URL).context("Invalid API URL")?,
        },
    };
    debug!(path = %path.display(), api = %api_url, "Opening session");

    let api = HttpAuthApi::with_timeout(api_url.clone(), Duration::from_secs(settings.timeout))
        .context("Failed to create HTTP client")?;

    Ok(SessionManager::new(api, store.with_api_url(api_url)))
}
