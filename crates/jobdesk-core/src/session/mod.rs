//! Session lifecycle for the admin console.
//!
//! [`SessionManager`] owns the login state, [`RouteGuard`] is the read-only
//! view that protected screens consult before rendering.

mod guard;
mod manager;
mod memory;
mod state;

pub use guard::{Access, LOGIN_PATH, RouteGuard};
pub use manager::{LOGIN_FAILED_MESSAGE, SessionManager};
pub use memory::MemoryTokenStore;
pub use state::SessionState;
