//! Persisted session: the serialized current user and the raw bearer token.
//!
//! Both live under fixed keys of a [`KeyValueStore`] and are always cleared
//! together.

use scoda_shared::constants::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER};
use scoda_shared::User;

use crate::error::Result;
use crate::kv::KeyValueStore;

/// What was found in storage at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub token: Option<String>,
}

/// Load/save/clear contract for the session, independent of the backend.
pub trait SessionPersistence: Send + Sync {
    /// Read the stored session. A stored user that no longer parses is
    /// removed and reported as absent.
    fn load(&self) -> Result<SessionSnapshot>;

    fn save(&self, user: &User, token: &str) -> Result<()>;

    /// Rewrite the cached user without touching the token.
    fn save_user(&self, user: &User) -> Result<()>;

    fn clear(&self) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> SessionPersistence for T {
    fn load(&self) -> Result<SessionSnapshot> {
        let token = self.get(STORAGE_KEY_TOKEN)?.filter(|t| !t.is_empty());

        let user = match self.get(STORAGE_KEY_USER)? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to parse stored user, discarding it");
                    self.remove(STORAGE_KEY_USER)?;
                    None
                }
            },
            None => None,
        };

        Ok(SessionSnapshot { user, token })
    }

    fn save(&self, user: &User, token: &str) -> Result<()> {
        self.save_user(user)?;
        self.set(STORAGE_KEY_TOKEN, token)
    }

    fn save_user(&self, user: &User) -> Result<()> {
        let json = serde_json::to_string(user)?;
        self.set(STORAGE_KEY_USER, &json)
    }

    fn clear(&self) -> Result<()> {
        self.remove(STORAGE_KEY_USER)?;
        self.remove(STORAGE_KEY_TOKEN)
    }
}
