//! HTTP client for the auth/favorites backend.
//!
//! The bearer token is resolved from session storage per request and
//! never cached, so an external login or logout takes effect on the
//! next call.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::backend::error::{AuthError, FavoritesApiError};
use crate::favorites::FavoritesApi;
use crate::session::{SessionStore, UserProfile};

/// Payload returned by the register and login endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: UserProfile,
    pub token: String,
}

/// Error body shape the backend uses; some endpoints say `message`,
/// others say `error`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

pub struct BackendClient {
    client: Client,
    base_url: String,
    session: SessionStore,
}

impl BackendClient {
    pub fn new(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        session: SessionStore,
    ) -> Self {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .expect("Failed to build backend client");

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            session,
        }
    }

    /// `POST /auth/register` — create an account, returns a fresh session.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, AuthError> {
        let response = self
            .client
            .post(format!("{}/auth/register", self.base_url))
            .json(&json!({ "name": name, "email": email, "password": password }))
            .send()
            .await?;
        auth_payload(response, "Failed to register user").await
    }

    /// `POST /auth/login` — returns a fresh session.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let response = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        auth_payload(response, "Failed to login").await
    }

    /// `GET /favorites` — the authenticated user's favorite identifiers.
    pub async fn favorites(&self) -> Result<Vec<String>, FavoritesApiError> {
        let response = self
            .authorize(self.client.get(format!("{}/favorites", self.base_url)))
            .send()
            .await?;
        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::UNAUTHORIZED => Err(FavoritesApiError::Unauthorized),
            status => Err(FavoritesApiError::Status {
                status: status.as_u16(),
            }),
        }
    }

    /// `POST /favorites/add` — add one identifier remotely.
    pub async fn add_favorite(&self, code: &str) -> Result<(), FavoritesApiError> {
        if code.is_empty() {
            return Err(FavoritesApiError::InvalidCode);
        }
        let response = self
            .authorize(
                self.client
                    .post(format!("{}/favorites/add", self.base_url))
                    .json(&json!({ "countryCode": code })),
            )
            .send()
            .await?;
        confirm(response)
    }

    /// `DELETE /favorites/remove/{code}` — remove one identifier remotely.
    pub async fn remove_favorite(&self, code: &str) -> Result<(), FavoritesApiError> {
        if code.is_empty() {
            return Err(FavoritesApiError::InvalidCode);
        }
        let response = self
            .authorize(
                self.client
                    .delete(format!("{}/favorites/remove/{}", self.base_url, code)),
            )
            .send()
            .await?;
        confirm(response)
    }

    /// Attach the bearer token when a session exists. Resolved on demand,
    /// not cached.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

async fn auth_payload(response: Response, fallback: &str) -> Result<AuthResponse, AuthError> {
    if response.status().is_success() {
        return Ok(response.json().await?);
    }
    let message = error_message(response)
        .await
        .unwrap_or_else(|| fallback.to_string());
    Err(AuthError::Rejected { message })
}

/// Best-effort extraction of the backend's own error message.
async fn error_message(response: Response) -> Option<String> {
    let body: ErrorBody = response.json().await.ok()?;
    body.message.or(body.error)
}

/// Map a confirmation response: success is all we need, the payload is
/// not inspected.
fn confirm(response: Response) -> Result<(), FavoritesApiError> {
    match response.status() {
        status if status.is_success() => Ok(()),
        StatusCode::UNAUTHORIZED => Err(FavoritesApiError::Unauthorized),
        status => Err(FavoritesApiError::Status {
            status: status.as_u16(),
        }),
    }
}

#[async_trait]
impl FavoritesApi for BackendClient {
    async fn list(&self) -> Result<Vec<String>, FavoritesApiError> {
        self.favorites().await
    }

    async fn add(&self, code: &str) -> Result<(), FavoritesApiError> {
        self.add_favorite(code).await
    }

    async fn remove(&self, code: &str) -> Result<(), FavoritesApiError> {
        self.remove_favorite(code).await
    }
}
