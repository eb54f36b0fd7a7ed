//! Sign-in API service

use crate::client::{AdminApi, ClientError};
use hotel_console_core::User;
use reqwest::Method;
use serde::{Deserialize, Serialize};

pub const SIGN_IN_PATH: &str = "/api/admin/login";

#[derive(Debug, Clone, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignInResponse {
    pub token: String,
    pub user: User,
}

/// Authentication API service
#[derive(Clone)]
pub struct AuthApiService {
    api: AdminApi,
}

impl AuthApiService {
    pub const fn new(api: AdminApi) -> Self {
        Self { api }
    }

    /// Exchange credentials for a token and keep it on the shared client.
    ///
    /// The returned user is what the app shell receives through its login
    /// handler.
    pub async fn sign_in(&self, email: String, password: String) -> Result<User, ClientError> {
        let request = self
            .api
            .request(Method::POST, SIGN_IN_PATH)
            .json(&SignInRequest { email, password });
        let response: SignInResponse = self.api.execute(request).await?;

        self.api.set_token(&response.token);
        self.api.store_admin_info(&response.user)?;
        Ok(response.user)
    }
}
