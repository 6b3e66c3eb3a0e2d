// demos/web_app/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use hauss_auth::{SessionCookieSettings, SessionSecret};
use std::env;

pub const DEFAULT_BACKEND_BASE_URL: &str = "https://bit-hauss-backend.vercel.app";

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub backend_base_url: String,

  // Cookie session; the secret has no fallback value
  pub session_secret: SessionSecret,
  pub session_cookie: SessionCookieSettings,

  // Treat non-2xx backend responses as errors instead of parsing their bodies
  pub reject_error_status: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };
    let parse_bool = |var_name: &str, default: &str| {
      get_env(var_name)
        .unwrap_or_else(|_| default.to_string())
        .parse::<bool>()
        .map_err(|e| AppError::Config(format!("Invalid {} value: {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let backend_base_url = get_env("BACKEND_BASE_URL").unwrap_or_else(|_| DEFAULT_BACKEND_BASE_URL.to_string());

    let session_secret = SessionSecret::new(get_env("SESSION_SECRET")?)
      .map_err(|e| AppError::Config(format!("Invalid SESSION_SECRET: {}", e)))?;
    let session_cookie = SessionCookieSettings {
      name: get_env("SESSION_COOKIE_NAME").unwrap_or_else(|_| SessionCookieSettings::default().name),
      secure: parse_bool("SESSION_COOKIE_SECURE", "true")?,
    };

    let reject_error_status = parse_bool("API_REJECT_ERROR_STATUS", "false")?;

    tracing::info!("Application configuration loaded successfully.");
    // The secret's Debug output is redacted, so the whole config is safe to log.
    tracing::debug!(config = ?Self {
      server_host: server_host.clone(),
      server_port,
      backend_base_url: backend_base_url.clone(),
      session_secret: session_secret.clone(),
      session_cookie: session_cookie.clone(),
      reject_error_status,
    }, "Loaded config details");

    Ok(Self {
      server_host,
      server_port,
      backend_base_url,
      session_secret,
      session_cookie,
      reject_error_status,
    })
  }
}
