// core/src/session/store.rs
use std::sync::Arc;

use actix_web::cookie::Cookie;
use tracing::debug;

use super::{SessionCodec, SessionData, SessionSlot};
use crate::error::SessionError;

/// Get/update access to one browser's session.
///
/// There is no delete: logging out is an [`update`](SessionStore::update)
/// that unsets the user, see [`clear_user`](SessionStore::clear_user).
pub trait SessionStore {
  /// Snapshot of the current session value.
  fn get(&self) -> SessionData;

  /// Applies `mutator` to the stored value and re-persists it.
  fn update<F>(&self, mutator: F) -> Result<(), SessionError>
  where
    F: FnOnce(&mut SessionData);

  fn clear_user(&self) -> Result<(), SessionError> {
    self.update(|data| data.user = None)
  }
}

/// Request-scoped session backed by the encrypted cookie.
///
/// Every `update` re-seals the payload; the sealed cookie waits in a pending
/// slot until the HTTP layer attaches it to the response.
#[derive(Debug, Clone)]
pub struct CookieSession {
  codec: Arc<SessionCodec>,
  data: SessionSlot<SessionData>,
  pending: SessionSlot<Option<Cookie<'static>>>,
}

impl CookieSession {
  /// Opens the incoming cookie, if any.
  pub fn load(codec: Arc<SessionCodec>, cookie: Option<&Cookie<'_>>) -> Self {
    let data = codec.open(cookie);
    Self {
      codec,
      data: SessionSlot::new(data),
      pending: SessionSlot::default(),
    }
  }

  /// The cookie produced by the most recent update, if it has not been taken yet.
  pub fn take_pending_cookie(&self) -> Option<Cookie<'static>> {
    self.pending.take()
  }

  pub fn has_pending_cookie(&self) -> bool {
    self.pending.read().is_some()
  }
}

impl SessionStore for CookieSession {
  fn get(&self) -> SessionData {
    self.data.read().clone()
  }

  fn update<F>(&self, mutator: F) -> Result<(), SessionError>
  where
    F: FnOnce(&mut SessionData),
  {
    let sealed = self.data.try_update(mutator, |next| self.codec.seal(next))?;

    debug!(cookie = %sealed.name(), "Session updated; cookie re-sealed.");
    self.pending.replace(Some(sealed));
    Ok(())
  }
}
