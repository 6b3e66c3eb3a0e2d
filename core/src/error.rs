// core/src/error.rs
use thiserror::Error;

use crate::actions::Redirect;

/// Failures raised by [`ApiClient`](crate::ApiClient) calls.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("Request to {url} failed. Source: {source}")]
  Transport {
    url: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("Could not encode request body for {url}. Source: {source}")]
  Encode {
    url: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("Response from {url} is not valid JSON. Source: {source}")]
  Decode {
    url: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("Invalid header value for '{name}'")]
  InvalidHeader { name: String },

  // Only produced when the client opts into status checking.
  #[error("{url} responded with status {status}")]
  Status { url: String, status: u16, body: String },
}

#[derive(Debug, Error)]
pub enum SessionError {
  #[error("Session secret must be at least {min} bytes long (got {actual})")]
  WeakSecret { min: usize, actual: usize },

  #[error("Could not encode session payload. Source: {0}")]
  Encode(#[from] serde_json::Error),

  #[error("Session cookie could not be sealed")]
  Seal,
}

/// Outcome of the authentication actions when they do not redirect.
#[derive(Debug, Error)]
pub enum AuthError {
  /// Form input rejected locally, message is shown to the user verbatim.
  #[error("{0}")]
  Validation(String),

  /// The sign-in call itself failed; the client error is passed through untouched.
  #[error(transparent)]
  Authentication(#[from] ApiError),

  #[error("Sign-in was rejected by the backend")]
  Rejected,

  #[error("No authenticated user in session")]
  SessionMissing,

  #[error("Registration is not available")]
  RegistrationUnavailable,

  #[error(transparent)]
  Session(#[from] SessionError),
}

impl AuthError {
  /// Where the browser should be sent instead of seeing this error, if anywhere.
  pub fn redirect(&self) -> Option<Redirect> {
    match self {
      AuthError::SessionMissing => Some(Redirect::login()),
      _ => None,
    }
  }
}

pub type AuthResult<T, E = AuthError> = std::result::Result<T, E>;
