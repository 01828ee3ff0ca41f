//! Durable token storage trait.

use crate::{Result, TokenPair};

/// Durable client-side storage for the session snapshot.
///
/// The access-token and refresh-token slots are only ever written or
/// cleared together. Calls are synchronous.
pub trait TokenStore: Send + Sync {
    /// Read the stored pair, or `None` if no session is persisted.
    fn load(&self) -> Result<Option<TokenPair>>;

    /// Replace the stored pair.
    fn save(&self, tokens: &TokenPair) -> Result<()>;

    /// Remove both slots. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}
