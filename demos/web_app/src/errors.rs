// demos/web_app/src/errors.rs

use actix_web::http::header::LOCATION;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use hauss_auth::{AuthError, SessionError, LOGIN_ROUTE};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("{0}")]
  Validation(String),

  #[error("{0}")]
  Auth(String),

  // Rendered as a redirect to the login route, never as a JSON body.
  #[error("Not authenticated")]
  Unauthenticated,

  #[error("Not implemented: {0}")]
  NotImplemented(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Session Error: {source}")]
  Session {
    #[from]
    source: SessionError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

impl From<AuthError> for AppError {
  fn from(err: AuthError) -> Self {
    match err {
      AuthError::Validation(message) => AppError::Validation(message),
      // The raw client error is what the caller sees.
      e @ (AuthError::Authentication(_) | AuthError::Rejected) => AppError::Auth(e.to_string()),
      AuthError::SessionMissing => AppError::Unauthenticated,
      AuthError::RegistrationUnavailable => AppError::NotImplemented("Registration is not available".to_string()),
      AuthError::Session(source) => AppError::Session { source },
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::Auth(_) => StatusCode::UNAUTHORIZED,
      AppError::Unauthenticated => StatusCode::SEE_OTHER,
      AppError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
      AppError::Config(_) | AppError::Session { .. } | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Unauthenticated => HttpResponse::SeeOther()
        .insert_header((LOCATION, LOGIN_ROUTE))
        .finish(),
      AppError::Validation(m) | AppError::Auth(m) | AppError::NotImplemented(m) => {
        HttpResponse::build(self.status_code()).json(json!({ "error": m }))
      }
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Session { .. } => HttpResponse::InternalServerError().json(json!({"error": "Session could not be saved"})),
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
