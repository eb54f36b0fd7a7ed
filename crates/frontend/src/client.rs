//! Admin API client and credential handling

use hotel_console_core::storage::keys;
use hotel_console_core::{CredentialStore, KeyValueStore};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            401 | 403 => Self::AuthenticationFailed(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }
}

impl From<ClientError> for hotel_console_core::Error {
    fn from(err: ClientError) -> Self {
        Self::Request(err.to_string())
    }
}

struct Inner {
    client: Client,
    base_url: String,
    token: RefCell<Option<String>>,
    storage: Rc<dyn KeyValueStore>,
}

/// Admin API client.
///
/// Cheap to clone; clones share the bearer token. The token is mirrored to
/// `auth_token` in storage so other screens can pick it up.
#[derive(Clone)]
pub struct AdminApi {
    inner: Rc<Inner>,
}

impl PartialEq for AdminApi {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl AdminApi {
    pub fn new(
        base_url: impl Into<String>,
        storage: Rc<dyn KeyValueStore>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder().build()?;

        Ok(Self {
            inner: Rc::new(Inner {
                client,
                base_url,
                token: RefCell::new(None),
                storage,
            }),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Current bearer token, falling back to the persisted one
    pub fn token(&self) -> Option<String> {
        if let Some(token) = self.inner.token.borrow().clone() {
            return Some(token);
        }
        self.inner.storage.get(keys::AUTH_TOKEN).ok().flatten()
    }

    pub fn set_token(&self, token: &str) {
        *self.inner.token.borrow_mut() = Some(token.to_string());
        if let Err(e) = self.inner.storage.set(keys::AUTH_TOKEN, token) {
            tracing::warn!(error = %e, "Failed to persist auth token");
        }
    }

    /// Persist the signed-in admin's profile as returned by the API
    pub fn store_admin_info<T: Serialize>(&self, info: &T) -> Result<(), ClientError> {
        let serialized = serde_json::to_string(info)?;
        if let Err(e) = self.inner.storage.set(keys::ADMIN_INFO, &serialized) {
            tracing::warn!(error = %e, "Failed to persist admin info");
        }
        Ok(())
    }

    /// Join an API path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.inner.base_url, path.trim_start_matches('/'))
    }

    /// Create a request builder, authenticated when a token is held
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut request = self.inner.client.request(method, self.url(path));

        if let Some(token) = self.token() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        request
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }
}

impl CredentialStore for AdminApi {
    fn clear_token(&self) {
        self.inner.token.borrow_mut().take();
        for key in [keys::AUTH_TOKEN, keys::ADMIN_INFO] {
            if let Err(e) = self.inner.storage.remove(key) {
                tracing::warn!(key, error = %e, "Failed to clear credential");
            }
        }
    }
}
