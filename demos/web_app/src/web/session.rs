// demos/web_app/src/web/session.rs

//! Per-request access to the cookie session and the signed-in user.

use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::http::header::LOCATION;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest, HttpResponse, HttpResponseBuilder};
use futures_util::future::{ready, Ready};
use hauss_auth::{current_user, AuthError, CookieSession, Redirect, SignInUser};

use crate::errors::AppError;
use crate::state::AppState;

/// The request's [`CookieSession`], opened once and shared by every extractor
/// of the same request through the request extensions.
#[derive(Debug, Clone)]
pub struct RequestSession(CookieSession);

impl RequestSession {
  fn from_http_request(req: &HttpRequest) -> Result<Self, AppError> {
    if let Some(existing) = req.extensions().get::<CookieSession>() {
      return Ok(RequestSession(existing.clone()));
    }

    let state = req
      .app_data::<web::Data<AppState>>()
      .ok_or_else(|| AppError::Internal("AppState is not registered with the App.".to_string()))?;
    let codec = state.session_codec.clone();
    let incoming = req.cookie(codec.cookie_name());
    let session = CookieSession::load(codec, incoming.as_ref());

    req.extensions_mut().insert(session.clone());
    Ok(RequestSession(session))
  }

  /// Sets the re-sealed session cookie on `builder` if the session changed.
  pub fn apply_cookie(&self, builder: &mut HttpResponseBuilder) {
    if let Some(cookie) = self.0.take_pending_cookie() {
      builder.cookie(cookie);
    }
  }

  /// `303 See Other` to `redirect`, carrying the session cookie when it changed.
  pub fn redirect(&self, redirect: &Redirect) -> HttpResponse {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((LOCATION, redirect.location()));
    self.apply_cookie(&mut builder);
    builder.finish()
  }
}

impl Deref for RequestSession {
  type Target = CookieSession;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl FromRequest for RequestSession {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(RequestSession::from_http_request(req))
  }
}

#[derive(Clone)]
struct CachedUser(SignInUser);

/// [`current_user`] memoized for the lifetime of one request.
pub fn cached_current_user(req: &HttpRequest, session: &RequestSession) -> Result<SignInUser, AuthError> {
  if let Some(CachedUser(user)) = req.extensions().get::<CachedUser>() {
    return Ok(user.clone());
  }

  let user = current_user(&**session)?;
  req.extensions_mut().insert(CachedUser(user.clone()));
  Ok(user)
}
