//! jobdesk-core - Session types and traits for the job portal admin console.
//!
//! All authenticated work flows through a [`SessionManager`], which owns the
//! login state of the admin user and keeps it in step with the token pair
//! held by a [`TokenStore`].
//!
//! # Example
//!
//! ```no_run
//! use jobdesk_core::{AuthApi, Credentials, MemoryTokenStore, SessionManager};
//!
//! # async fn example(api: impl AuthApi) {
//! let session = SessionManager::new(api, MemoryTokenStore::new());
//!
//! if !session.check_auth().await {
//!     session.login(Credentials::new("admin", "hunter2")).await;
//! }
//!
//! if let Some(user) = session.state().user() {
//!     println!("Logged in as {} ({})", user.username, user.role);
//! }
//! # }
//! ```

pub mod credentials;
pub mod error;
pub mod session;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::Error;
pub use session::{Access, LOGIN_PATH, MemoryTokenStore, RouteGuard, SessionManager, SessionState};
pub use tokens::{AccessToken, RefreshToken, TokenPair};
pub use traits::{AuthApi, TokenStore};
pub use types::{ApiUrl, User};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
