use reqwest::Method;
use serde_json::json;

use scoda_shared::{AuthResponse, UserRecord};

use super::{ApiClient, ApiError};

impl ApiClient {
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let body = json!({ "name": name, "email": email, "password": password });
        let req = self.request(Method::POST, &["auth", "signup"]).json(&body);
        self.send_json(req, "Signup failed").await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = json!({ "email": email, "password": password });
        let req = self.request(Method::POST, &["auth", "login"]).json(&body);
        self.send_json(req, "Login failed").await
    }

    /// "Who am I" for the current bearer token.
    pub async fn current_user(&self) -> Result<UserRecord, ApiError> {
        let req = self.request(Method::GET, &["auth", "me"]);
        self.send_json(req, "Failed to fetch current user").await
    }

    pub async fn update_profile(&self, name: &str, email: &str) -> Result<UserRecord, ApiError> {
        let body = json!({ "name": name, "email": email });
        let req = self.request(Method::PUT, &["auth", "profile"]).json(&body);
        self.send_json(req, "Failed to update profile").await
    }

    /// Server-side logout for `token`. Callers treat this as best-effort.
    ///
    /// The token is passed in because the session store has usually cleared
    /// the shared slot by the time this request is built.
    pub async fn logout(&self, token: Option<&str>) -> Result<(), ApiError> {
        let req = self.request_as(Method::POST, &["auth", "logout"], token);
        self.send_empty(req, "Logout failed").await
    }

    /// Permanently delete the current account.
    pub async fn delete_account(&self) -> Result<(), ApiError> {
        let req = self.request(Method::DELETE, &["auth", "account"]);
        self.send_empty(req, "Failed to delete account").await
    }
}
