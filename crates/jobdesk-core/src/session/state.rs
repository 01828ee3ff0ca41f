//! Observable session state.

use crate::types::User;

/// A snapshot of the admin session as seen by the UI.
///
/// Fields are only mutated by [`SessionManager`](super::SessionManager), which
/// sets `user` only after the token pair backing it has been persisted. That
/// is what lets [`is_authenticated`](Self::is_authenticated) be derived from
/// `user` alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub(crate) user: Option<User>,
    pub(crate) is_loading: bool,
    pub(crate) error: Option<String>,
}

impl SessionState {
    /// The identity record of the logged-in user.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True while a login or identity check is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The last failure message, until a successful operation or
    /// `clear_error` resets it.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.is_loading = false;
        self.error = None;
    }

    pub(crate) fn sign_out(&mut self) {
        self.user = None;
        self.is_loading = false;
    }
}
