// core/src/session/codec.rs

//! Sealing and opening of the encrypted session cookie.

use actix_web::cookie::{Cookie, CookieJar, Key, SameSite};
use tracing::{debug, warn};

use super::SessionData;
use crate::error::SessionError;

/// Shortest secret accepted for key derivation.
pub const MIN_SECRET_LEN: usize = 32;

/// Server-held secret the cookie encryption key is derived from.
///
/// Loaded once at startup and never rotated. Has no `Default`: a process
/// without a configured secret must not start.
#[derive(Clone)]
pub struct SessionSecret(String);

impl SessionSecret {
  pub fn new(secret: impl Into<String>) -> Result<Self, SessionError> {
    let secret = secret.into();
    if secret.len() < MIN_SECRET_LEN {
      return Err(SessionError::WeakSecret {
        min: MIN_SECRET_LEN,
        actual: secret.len(),
      });
    }
    Ok(SessionSecret(secret))
  }

  fn as_bytes(&self) -> &[u8] {
    self.0.as_bytes()
  }
}

impl std::fmt::Debug for SessionSecret {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("SessionSecret([REDACTED])")
  }
}

#[derive(Debug, Clone)]
pub struct SessionCookieSettings {
  pub name: String,
  pub secure: bool,
}

impl Default for SessionCookieSettings {
  fn default() -> Self {
    Self {
      name: "hauss_session".to_string(),
      secure: true,
    }
  }
}

/// Turns [`SessionData`] into an AES-GCM encrypted cookie and back.
#[derive(Clone)]
pub struct SessionCodec {
  key: Key,
  settings: SessionCookieSettings,
}

impl SessionCodec {
  pub fn new(secret: &SessionSecret, settings: SessionCookieSettings) -> Self {
    // derive_from panics below 32 bytes; SessionSecret::new already guarantees that.
    let key = Key::derive_from(secret.as_bytes());
    Self { key, settings }
  }

  pub fn cookie_name(&self) -> &str {
    &self.settings.name
  }

  /// Encrypts `data` into a ready-to-send `Set-Cookie` value.
  pub fn seal(&self, data: &SessionData) -> Result<Cookie<'static>, SessionError> {
    let payload = serde_json::to_string(data)?;

    let mut cookie = Cookie::new(self.settings.name.clone(), payload);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(self.settings.secure);
    cookie.set_same_site(SameSite::Lax);

    let mut jar = CookieJar::new();
    jar.private_mut(&self.key).add(cookie);
    jar.get(&self.settings.name).cloned().ok_or(SessionError::Seal)
  }

  /// Decrypts an incoming cookie.
  ///
  /// Anything that cannot be opened (absent, tampered, sealed under another
  /// secret, or an outdated payload shape) starts a fresh, empty session.
  pub fn open(&self, cookie: Option<&Cookie<'_>>) -> SessionData {
    let Some(cookie) = cookie else {
      return SessionData::default();
    };

    let mut jar = CookieJar::new();
    jar.add_original(cookie.clone().into_owned());
    let Some(plain) = jar.private(&self.key).get(&self.settings.name) else {
      debug!(cookie = %self.settings.name, "Session cookie failed to decrypt; starting empty session.");
      return SessionData::default();
    };

    match serde_json::from_str::<SessionData>(plain.value()) {
      Ok(data) => data,
      Err(e) => {
        warn!(error = %e, "Session payload could not be decoded; starting empty session.");
        SessionData::default()
      }
    }
  }
}

impl std::fmt::Debug for SessionCodec {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SessionCodec")
      .field("settings", &self.settings)
      .finish_non_exhaustive()
  }
}
