// demos/web_app/src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpRequest, HttpResponse};
use hauss_auth::{login_or_register, logout, AuthError, LoginForm};
use tracing::{info, instrument, warn};

use crate::errors::AppError; // Your application specific error
use crate::state::AppState;
use crate::web::session::{cached_current_user, RequestSession};

#[instrument(
    name = "handler::login",
    skip(app_state, session, form),
    fields(username = %form.username)
)]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  session: RequestSession,
  form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
  info!("Login attempt for username: {}", form.username);

  match login_or_register(app_state.backend.as_ref(), &*session, &form).await {
    Ok(redirect) => {
      info!("Login successful for username: {}", form.username);
      Ok(session.redirect(&redirect))
    }
    Err(auth_err) => {
      // Returned inline to the form; the session was not modified.
      warn!("Login failed for username {}: {:?}", form.username, auth_err);
      Err(AppError::from(auth_err))
    }
  }
}

#[instrument(name = "handler::logout", skip(session))]
pub async fn logout_handler(session: RequestSession) -> Result<HttpResponse, AppError> {
  let redirect = logout(&*session)?;
  Ok(session.redirect(&redirect))
}

#[instrument(name = "handler::me", skip(req, session))]
pub async fn me_handler(req: HttpRequest, session: RequestSession) -> Result<HttpResponse, AppError> {
  match cached_current_user(&req, &session) {
    Ok(user) => Ok(HttpResponse::Ok().json(user)),
    Err(AuthError::SessionMissing) => {
      // The cleared session has to reach the browser along with the redirect.
      Ok(session.redirect(&hauss_auth::Redirect::login()))
    }
    Err(other) => Err(AppError::from(other)),
  }
}
