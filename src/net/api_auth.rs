//! `auth` and `users` resource groups.
//!
//! Login and register persist the returned user (with its token) before
//! returning, so the very next call is already authorized.

#[cfg(test)]
#[path = "api_auth_test.rs"]
mod api_auth_test;

use serde::Serialize;

use super::api::ApiClient;
use super::error::ApiError;
use super::transport::Transport;
use super::types::User;
use crate::state::storage::KeyValueStore;

pub(crate) const LOGIN_PATH: &str = "/api/auth/login";
pub(crate) const REGISTER_PATH: &str = "/api/auth/register";
pub(crate) const ME_PATH: &str = "/api/users/me";

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Credential exchange endpoints.
pub struct AuthApi<'a, T, B> {
    client: &'a ApiClient<T, B>,
}

/// Current-user endpoints.
pub struct UsersApi<'a, T, B> {
    client: &'a ApiClient<T, B>,
}

impl<T: Transport, B: KeyValueStore> ApiClient<T, B> {
    pub fn auth(&self) -> AuthApi<'_, T, B> {
        AuthApi { client: self }
    }

    pub fn users(&self) -> UsersApi<'_, T, B> {
        UsersApi { client: self }
    }
}

impl<T: Transport, B: KeyValueStore> AuthApi<'_, T, B> {
    /// `POST /api/auth/login`; stores the returned user on success.
    ///
    /// # Errors
    ///
    /// Returns the server's message (e.g. `"Invalid credentials"`) on failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let user: User = self.client.post(LOGIN_PATH, &LoginBody { email, password }).await?;
        self.client.store().write(Some(&user));
        log::info!("signed in as {}", user.id);
        Ok(user)
    }

    /// `POST /api/auth/register`; stores the returned user on success.
    ///
    /// # Errors
    ///
    /// Returns the server's message (e.g. duplicate email) on failure.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
        let user: User = self.client.post(REGISTER_PATH, &RegisterBody { name, email, password }).await?;
        self.client.store().write(Some(&user));
        log::info!("registered user {}", user.id);
        Ok(user)
    }
}

impl<T: Transport, B: KeyValueStore> UsersApi<'_, T, B> {
    /// `GET /api/users/me`. The profile never includes a token.
    ///
    /// # Errors
    ///
    /// Fails when the stored token is missing, expired, or rejected.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.client.get(ME_PATH).await
    }
}
