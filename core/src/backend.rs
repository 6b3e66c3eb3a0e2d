// core/src/backend.rs

//! The remote authentication service, as seen from this crate.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, instrument};

use crate::client::{ApiClient, BodyOptions};
use crate::error::ApiError;
use crate::models::SignInResponse;

/// Body of `POST /auth/signin`.
///
/// The backend keys accounts by e-mail, so the login form's `username` is
/// sent in the `email` field.
#[derive(Clone, Serialize)]
pub struct Credentials {
  pub email: String,
  pub password: String,
}

impl std::fmt::Debug for Credentials {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credentials")
      .field("email", &self.email)
      .field("password", &"[REDACTED]")
      .finish()
  }
}

#[async_trait]
pub trait AuthBackend: Send + Sync {
  async fn sign_in(&self, credentials: &Credentials) -> Result<SignInResponse, ApiError>;
}

/// [`AuthBackend`] reached over HTTP through an [`ApiClient`].
#[derive(Debug, Clone)]
pub struct RemoteAuthBackend {
  api: ApiClient,
  base_url: String,
}

impl RemoteAuthBackend {
  pub fn new(api: ApiClient, base_url: impl Into<String>) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self { api, base_url }
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub fn sign_in_url(&self) -> String {
    format!("{}/auth/signin", self.base_url)
  }
}

#[async_trait]
impl AuthBackend for RemoteAuthBackend {
  #[instrument(name = "backend::sign_in", skip(self, credentials), fields(email = %credentials.email), err(Display))]
  async fn sign_in(&self, credentials: &Credentials) -> Result<SignInResponse, ApiError> {
    let response: SignInResponse = self
      .api
      .post(&self.sign_in_url(), BodyOptions::json(credentials))
      .await?;
    info!(user_returned = response.user.is_some(), "Sign-in call completed.");
    Ok(response)
  }
}
