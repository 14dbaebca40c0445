mod support;

use std::sync::Arc;

use scoda_client::AuthStatus;
use scoda_shared::User;
use scoda_store::{MemoryStore, SessionPersistence};

use support::{signed_in, MockBackend, EMAIL, PASSWORD, TOKEN};

#[tokio::test]
async fn test_login_persists_session_for_next_start() {
    let mock = MockBackend::start().await;
    let (app, storage) = signed_in(&mock).await;

    assert_eq!(app.auth.status(), AuthStatus::Authenticated);
    assert_eq!(app.auth.token().as_deref(), Some(TOKEN));
    let stored = storage.load().unwrap();
    assert_eq!(stored.token.as_deref(), Some(TOKEN));
    assert_eq!(stored.user.map(|u| u.email), Some(EMAIL.to_string()));

    // A fresh process over the same storage verifies and restores it.
    let restarted = mock.app(storage.clone());
    assert_eq!(restarted.auth.status(), AuthStatus::Initializing);
    assert_eq!(restarted.auth.initialize().await, AuthStatus::Authenticated);
    assert_eq!(restarted.auth.user().map(|u| u.name), Some("Ada".to_string()));
    assert_eq!(mock.backend().requested("GET /auth/me"), 1);
}

#[tokio::test]
async fn test_wrong_password_reports_backend_message() {
    let mock = MockBackend::start().await;
    let storage = Arc::new(MemoryStore::new());
    let app = mock.app(storage.clone());
    app.auth.initialize().await;

    let err = app.auth.login(EMAIL, "nope").await.unwrap_err();
    assert_eq!(err.to_string(), "Login failed: Invalid credentials");
    assert!(!app.auth.is_authenticated());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn test_signup_validation_messages_are_joined() {
    let mock = MockBackend::start().await;
    let app = mock.app(Arc::new(MemoryStore::new()));
    app.auth.initialize().await;

    let err = app.auth.signup("Bob", "not-an-email", "x").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Signup failed: email must be an email; password is too short"
    );
}

#[tokio::test]
async fn test_signup_starts_authenticated_with_credits() {
    let mock = MockBackend::start().await;
    let app = mock.app(Arc::new(MemoryStore::new()));
    app.auth.initialize().await;

    let user = app.auth.signup("Bob", "bob@example.com", "hunter22").await.unwrap();
    assert_eq!(user.name, "Bob");
    assert_eq!(app.auth.credits(), Some(10));
    assert!(app.auth.is_authenticated());
}

#[tokio::test]
async fn test_logout_clears_local_state_even_if_backend_fails() {
    let mock = MockBackend::start().await;
    let (app, storage) = signed_in(&mock).await;
    mock.backend().fail_logout = true;

    app.auth.logout().await;

    assert_eq!(app.auth.status(), AuthStatus::Unauthenticated);
    assert!(app.auth.user().is_none());
    assert!(app.auth.token().is_none());
    assert!(storage.is_empty());
    assert_eq!(mock.backend().requested("POST /auth/logout"), 1);
}

#[tokio::test]
async fn test_logout_sends_the_session_token() {
    let mock = MockBackend::start().await;
    let (app, storage) = signed_in(&mock).await;

    app.auth.logout().await;

    let backend = mock.backend();
    assert_eq!(
        backend.logout_authorization,
        vec![Some(format!("Bearer {TOKEN}"))]
    );
    assert!(app.auth.token().is_none());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn test_rejected_stored_token_clears_session() {
    let mock = MockBackend::start().await;
    let storage = Arc::new(MemoryStore::new());
    let stale = User {
        id: "user-1".into(),
        name: "Ada".into(),
        email: EMAIL.into(),
        avatar: None,
        credits: Some(3),
    };
    storage.save(&stale, "expired-token").unwrap();

    let app = mock.app(storage.clone());
    assert_eq!(app.auth.initialize().await, AuthStatus::Unauthenticated);
    assert!(app.auth.user().is_none());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn test_profile_update_keeps_known_credits() {
    let mock = MockBackend::start().await;
    let (app, storage) = signed_in(&mock).await;

    let user = app.auth.update_profile("Ada L.", EMAIL).await.unwrap();
    assert_eq!(user.name, "Ada L.");
    assert_eq!(user.credits, Some(10));
    assert_eq!(
        storage.load().unwrap().user.map(|u| u.name),
        Some("Ada L.".to_string())
    );
}

#[tokio::test]
async fn test_delete_account_signs_out() {
    let mock = MockBackend::start().await;
    let (app, storage) = signed_in(&mock).await;

    app.auth.delete_account().await.unwrap();

    assert_eq!(app.auth.status(), AuthStatus::Unauthenticated);
    assert!(storage.is_empty());
    assert!(!mock.backend().account_exists);

    let err = app.auth.login(EMAIL, PASSWORD).await.unwrap_err();
    assert!(err.to_string().starts_with("Login failed"));
}

#[tokio::test]
async fn test_health_check() {
    let mock = MockBackend::start().await;
    let app = mock.app(Arc::new(MemoryStore::new()));
    assert!(app.api.health().await);
}
