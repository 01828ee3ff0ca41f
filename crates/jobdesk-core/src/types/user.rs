//! Identity record returned by `/auth/me`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The current user as described by the server.
///
/// Only `username` and `role` are relied on; the remaining fields are
/// carried through for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    pub username: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

fn default_role() -> String {
    "viewer".to_string()
}

fn default_active() -> bool {
    true
}

impl User {
    /// Full name when the server has one, otherwise the username.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }

    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}
