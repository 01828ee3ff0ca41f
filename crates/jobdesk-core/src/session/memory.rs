//! In-memory token store.

use std::sync::{Mutex, MutexGuard};

use crate::traits::TokenStore;
use crate::{Result, TokenPair};

/// A [`TokenStore`] that lives only as long as the process.
///
/// Useful for tests and for embedding the session manager where the host
/// already provides persistence.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<Option<TokenPair>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a pair, as if persisted by an
    /// earlier run.
    pub fn with_tokens(tokens: TokenPair) -> Self {
        Self {
            tokens: Mutex::new(Some(tokens)),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<TokenPair>> {
        self.tokens.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<TokenPair>> {
        Ok(self.slot().clone())
    }

    fn save(&self, tokens: &TokenPair) -> Result<()> {
        *self.slot() = Some(tokens.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccessToken, RefreshToken};

    #[test]
    fn save_load_clear() {
        let store = MemoryTokenStore::new();
        assert!(store.load().unwrap().is_none());

        let pair = TokenPair::new(AccessToken::new("a"), RefreshToken::new("r"));
        store.save(&pair).unwrap();
        assert_eq!(store.load().unwrap(), Some(pair));

        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
