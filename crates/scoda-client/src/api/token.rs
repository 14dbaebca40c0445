//! Source of the bearer token stamped on outgoing requests.

use std::sync::{Arc, RwLock};

/// Supplies the current bearer token, if any, at request time.
pub trait TokenProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Shared, settable token slot. Clones observe the same value.
///
/// The session store writes it; the API client only reads it.
#[derive(Debug, Clone, Default)]
pub struct SessionToken {
    inner: Arc<RwLock<Option<String>>>,
}

impl SessionToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: impl Into<String>) {
        let mut slot = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(token.into());
    }

    pub fn clear(&self) {
        let mut slot = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }

    pub fn get(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl TokenProvider for SessionToken {
    fn bearer_token(&self) -> Option<String> {
        self.get().filter(|t| !t.is_empty())
    }
}
