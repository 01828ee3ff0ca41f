//! Token storage in a single JSON session file.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

use jobdesk_core::error::{Error, StorageError};
use jobdesk_core::traits::TokenStore;
use jobdesk_core::{AccessToken, ApiUrl, RefreshToken, Result, TokenPair};

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

/// On-disk layout of the session file.
#[derive(Serialize, Deserialize)]
struct StoredSession {
    /// The API that issued the tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_url: Option<String>,
    access_token: AccessToken,
    refresh_token: RefreshToken,
}

/// A [`TokenStore`] persisting the token pair to one JSON file.
///
/// Writes go to a temporary file that is renamed over the session file, so
/// a reader sees either the old pair or the new one, never a mix. An
/// exclusive lock on a sibling `.lock` file serializes processes sharing
/// the same session file. On Unix the file is created with mode 0600.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
    api_url: Option<ApiUrl>,
}

impl FileTokenStore {
    /// Create a store backed by the file at `path`. Nothing is created until
    /// the first save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            api_url: None,
        }
    }

    /// Record `api_url` as the issuer of the tokens saved from now on.
    pub fn with_api_url(mut self, api_url: ApiUrl) -> Self {
        self.api_url = Some(api_url);
        self
    }

    /// The API URL recorded alongside the stored tokens, if any.
    pub fn stored_api_url(&self) -> Result<Option<ApiUrl>> {
        let Some(stored) = self.read_locked()? else {
            return Ok(None);
        };
        stored.api_url.map(ApiUrl::new).transpose()
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn read_error(&self, err: impl std::fmt::Display) -> Error {
        StorageError::Read {
            path: self.path.display().to_string(),
            message: err.to_string(),
        }
        .into()
    }

    fn write_error(&self, err: impl std::fmt::Display) -> Error {
        StorageError::Write {
            path: self.path.display().to_string(),
            message: err.to_string(),
        }
        .into()
    }

    fn open_lock(&self) -> Result<File> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())
            .map_err(|e| self.write_error(e))
    }

    fn read_locked(&self) -> Result<Option<StoredSession>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let lock = self.open_lock()?;
        lock.lock_shared().map_err(|e| self.read_error(e))?;
        let stored = self.read_stored();
        lock.unlock().map_err(|e| self.read_error(e))?;
        stored
    }

    fn read_stored(&self) -> Result<Option<StoredSession>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.read_error(e)),
        };

        let stored = serde_json::from_str(&json).map_err(|e| StorageError::Corrupt {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(Some(stored))
    }

    fn write_stored(&self, stored: &StoredSession) -> Result<()> {
        let json = serde_json::to_string_pretty(stored).map_err(|e| self.write_error(e))?;

        let temp_path = self
            .path
            .with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        if let Err(e) = write_private(&temp_path, json.as_bytes()) {
            let _ = fs::remove_file(&temp_path);
            return Err(self.write_error(e));
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            self.write_error(e)
        })
    }
}

/// Create `path` readable by the owner only and write `contents` to it.
/// The mode is applied at creation.
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

impl TokenStore for FileTokenStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<TokenPair>> {
        let stored = self.read_locked()?;
        debug!(found = stored.is_some(), "Loaded session file");
        Ok(stored.map(|s| TokenPair::new(s.access_token, s.refresh_token)))
    }

    #[instrument(skip(self, tokens), fields(path = %self.path.display()))]
    fn save(&self, tokens: &TokenPair) -> Result<()> {
        let stored = StoredSession {
            api_url: self.api_url.as_ref().map(|u| u.to_string()),
            access_token: tokens.access_token.clone(),
            refresh_token: tokens.refresh_token.clone(),
        };

        let lock = self.open_lock()?;
        lock.lock_exclusive().map_err(|e| self.write_error(e))?;
        let written = self.write_stored(&stored);
        lock.unlock().map_err(|e| self.write_error(e))?;
        written?;

        debug!("Saved session file");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn clear(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let lock = self.open_lock()?;
        lock.lock_exclusive().map_err(|e| self.write_error(e))?;
        let removed = match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.write_error(e)),
        };
        lock.unlock().map_err(|e| self.write_error(e))?;
        removed?;

        debug!("Removed session file");
        Ok(())
    }
}
