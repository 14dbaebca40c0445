//! Auth session store: the single source of truth for "who is logged in".
//!
//! The store keeps three copies of the session in step: its own in-memory
//! state, the [`SessionToken`] the API client reads, and the injected
//! [`SessionPersistence`]. Local state is authoritative on logout; the
//! backend is authoritative for whether a stored token is still valid.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;
use tracing::{info, warn};

use scoda_shared::User;
use scoda_store::{SessionPersistence, SessionSnapshot};

use crate::api::{ApiClient, SessionToken};
use crate::background::best_effort;
use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    /// A stored token is being verified; dependent UI should not render yet.
    Initializing,
    Authenticated,
    Unauthenticated,
}

#[derive(Debug, Clone)]
struct AuthState {
    status: AuthStatus,
    user: Option<User>,
    token: Option<String>,
}

impl AuthState {
    fn signed_out() -> Self {
        Self {
            status: AuthStatus::Unauthenticated,
            user: None,
            token: None,
        }
    }
}

pub struct AuthStore {
    api: Arc<ApiClient>,
    token: SessionToken,
    storage: Arc<dyn SessionPersistence>,
    state: RwLock<AuthState>,
}

impl AuthStore {
    /// A store in the `Initializing` state. Call [`AuthStore::initialize`]
    /// before relying on [`AuthStore::status`].
    pub fn new(
        api: Arc<ApiClient>,
        token: SessionToken,
        storage: Arc<dyn SessionPersistence>,
    ) -> Self {
        Self {
            api,
            token,
            storage,
            state: RwLock::new(AuthState {
                status: AuthStatus::Initializing,
                user: None,
                token: None,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, AuthState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, AuthState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn status(&self) -> AuthStatus {
        self.read().status
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == AuthStatus::Authenticated
    }

    /// The current user. While initializing this is the cached record.
    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn credits(&self) -> Option<u32> {
        self.read().user.as_ref().and_then(|u| u.credits)
    }

    /// Restore the persisted session and verify it against `/auth/me`.
    ///
    /// The cached user is installed optimistically first. Any verification
    /// failure clears memory and storage and leaves the store signed out.
    pub async fn initialize(&self) -> AuthStatus {
        let snapshot = self.storage.load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read stored session, starting signed out");
            SessionSnapshot::default()
        });

        let Some(stored_token) = snapshot.token else {
            if snapshot.user.is_some() {
                warn!("Stored user without a token, discarding it");
                self.clear_storage();
            }
            *self.write() = AuthState::signed_out();
            return AuthStatus::Unauthenticated;
        };

        let cached_avatar = snapshot.user.as_ref().and_then(|u| u.avatar.clone());
        self.token.set(stored_token.clone());
        {
            let mut state = self.write();
            state.user = snapshot.user;
            state.token = Some(stored_token);
        }

        match self.api.current_user().await {
            Ok(record) => {
                let user = User {
                    avatar: cached_avatar,
                    ..User::from(record)
                };
                if let Err(e) = self.storage.save_user(&user) {
                    warn!(error = %e, "Failed to persist verified user");
                }
                info!(user_id = %user.id, "Session restored");

                let mut state = self.write();
                state.user = Some(user);
                state.status = AuthStatus::Authenticated;
                AuthStatus::Authenticated
            }
            Err(e) => {
                warn!(error = %e, "Stored token invalid, clearing auth state");
                self.clear_local();
                AuthStatus::Unauthenticated
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let auth = self.api.login(email, password).await?;
        let user = User::from(auth.user);
        self.install_session(user.clone(), auth.token)?;
        info!(user_id = %user.id, "Logged in");
        Ok(user)
    }

    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ClientError> {
        let auth = self.api.signup(name, email, password).await?;
        let user = User::from(auth.user);
        self.install_session(user.clone(), auth.token)?;
        info!(user_id = %user.id, "Signed up");
        Ok(user)
    }

    /// Sign out locally, then tell the backend.
    ///
    /// Local state is cleared before the backend call and regardless of its
    /// outcome; a failed backend logout is only logged.
    pub async fn logout(&self) {
        let token = self.token();
        self.clear_local();
        info!("Logged out");
        best_effort("logout", self.api.logout(token.as_deref())).await;
    }

    pub async fn update_profile(&self, name: &str, email: &str) -> Result<User, ClientError> {
        let current = self
            .authenticated_user()
            .ok_or(ClientError::NotAuthenticated)?;

        let record = self.api.update_profile(name, email).await?;
        let user = User {
            credits: record.credits.or(current.credits),
            avatar: current.avatar,
            ..User::from(record)
        };

        self.storage.save_user(&user)?;
        self.write().user = Some(user.clone());
        info!(user_id = %user.id, "Profile updated");
        Ok(user)
    }

    /// Delete the account on the backend; local state is cleared only when
    /// the backend accepted the deletion.
    pub async fn delete_account(&self) -> Result<(), ClientError> {
        if self.authenticated_user().is_none() {
            return Err(ClientError::NotAuthenticated);
        }
        self.api.delete_account().await?;
        self.clear_local();
        info!("Account deleted");
        Ok(())
    }

    /// Mirror the server's credit balance into the cached user.
    pub fn set_user_credits(&self, credits: u32) {
        self.update_user(|user| user.credits = Some(credits));
    }

    /// Local decrement used when the backend reports usage but no balance.
    pub fn deduct_credits(&self, used: u32) {
        self.update_user(|user| {
            if let Some(credits) = user.credits.as_mut() {
                *credits = credits.saturating_sub(used);
            }
        });
    }

    fn update_user(&self, apply: impl FnOnce(&mut User)) {
        let updated = {
            let mut state = self.write();
            let Some(user) = state.user.as_mut() else {
                return;
            };
            apply(user);
            user.clone()
        };
        if let Err(e) = self.storage.save_user(&updated) {
            warn!(error = %e, "Failed to persist user");
        }
    }

    fn authenticated_user(&self) -> Option<User> {
        let state = self.read();
        match state.status {
            AuthStatus::Authenticated => state.user.clone(),
            _ => None,
        }
    }

    /// Persist first so a storage failure leaves the store untouched.
    fn install_session(&self, user: User, token: String) -> Result<(), ClientError> {
        self.storage.save(&user, &token)?;
        self.token.set(token.clone());
        *self.write() = AuthState {
            status: AuthStatus::Authenticated,
            user: Some(user),
            token: Some(token),
        };
        Ok(())
    }

    fn clear_local(&self) {
        *self.write() = AuthState::signed_out();
        self.token.clear();
        self.clear_storage();
    }

    fn clear_storage(&self) {
        if let Err(e) = self.storage.clear() {
            warn!(error = %e, "Failed to clear stored session");
        }
    }
}
