// core/src/models.rs

//! Wire types exchanged with the remote backend and stored in the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserType {
  SuperAdmin,
  Moderator,
  Buyer,
  Seller,
  Intermediary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
  Unverified,
  Verified,
}

/// Full user record as the backend owns it.
///
/// This layer never keeps a `User` around; only the [`SignInUser`] projection
/// goes into the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id: String,
  pub email: String,
  #[serde(skip_serializing)] // Never echo the hash back out
  pub password: String,
  #[serde(rename = "type")]
  pub user_type: UserType,
  pub name: String,
  pub phone: String,
  pub tax_regime: String,
  pub rfc: String,
  pub status: UserStatus,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cover: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub uuid: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub create_at: Option<DateTime<Utc>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub update_at: Option<DateTime<Utc>>,
}

impl User {
  /// The redacted subset that is safe to keep in a session cookie.
  pub fn projection(&self) -> SignInUser {
    SignInUser {
      id: self.id.clone(),
      uuid: self.uuid.clone(),
      email: self.email.clone(),
      user_type: self.user_type,
      name: self.name.clone(),
      status: self.status,
    }
  }
}

/// User projection returned by `/auth/signin` and stored in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInUser {
  pub id: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub uuid: Option<String>,
  pub email: String,
  #[serde(rename = "type")]
  pub user_type: UserType,
  pub name: String,
  pub status: UserStatus,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInTokens {
  pub access_token: String,
  pub refresh_token: String,
  pub expires_in: String,
}

impl std::fmt::Debug for SignInTokens {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SignInTokens")
      .field("access_token", &"[REDACTED]")
      .field("refresh_token", &"[REDACTED]")
      .field("expires_in", &self.expires_in)
      .finish()
  }
}

/// Body of a `/auth/signin` response. Consumed right away, never stored as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignInResponse {
  #[serde(default)]
  pub user: Option<SignInUser>,
  #[serde(default)]
  pub tokens: Option<SignInTokens>,
}
