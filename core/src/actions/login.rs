// core/src/actions/login.rs
use serde::Deserialize;
use tracing::{event, instrument, warn, Level};

use super::validation::{validate_password, validate_username};
use super::Redirect;
use crate::backend::{AuthBackend, Credentials};
use crate::error::AuthError;
use crate::session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginType {
  Login,
  Register,
}

impl LoginType {
  /// Anything other than `"register"` is treated as a login.
  pub fn from_form(value: Option<&str>) -> Self {
    match value {
      Some(v) if v.eq_ignore_ascii_case("register") => LoginType::Register,
      _ => LoginType::Login,
    }
  }
}

/// Fields posted by the login/registration form.
#[derive(Clone, Default, Deserialize)]
pub struct LoginForm {
  #[serde(default)]
  pub username: String,
  #[serde(default)]
  pub password: String,
  #[serde(default, rename = "loginType")]
  pub login_type: Option<String>,
}

impl LoginForm {
  pub fn login_type(&self) -> LoginType {
    LoginType::from_form(self.login_type.as_deref())
  }
}

impl std::fmt::Debug for LoginForm {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("LoginForm")
      .field("username", &self.username)
      .field("password", &"[REDACTED]")
      .field("login_type", &self.login_type)
      .finish()
  }
}

/// Validates the form, signs in against the backend and stores the returned
/// user in the session.
///
/// Errors come back as values: validation failures never reach the network,
/// and a failed or rejected sign-in leaves the session untouched.
#[instrument(
    name = "actions::login_or_register",
    skip(backend, session, form),
    fields(username = %form.username, login_type = ?form.login_type())
)]
pub async fn login_or_register<B, S>(backend: &B, session: &S, form: &LoginForm) -> Result<Redirect, AuthError>
where
  B: AuthBackend + ?Sized,
  S: SessionStore,
{
  if let Some(message) = validate_username(&form.username).or_else(|| validate_password(&form.password)) {
    warn!(reason = %message, "Login form rejected by validation.");
    return Err(AuthError::Validation(message));
  }

  if form.login_type() == LoginType::Register {
    warn!("Registration requested but no registration flow exists.");
    return Err(AuthError::RegistrationUnavailable);
  }

  let credentials = Credentials {
    email: form.username.clone(),
    password: form.password.clone(),
  };

  let response = match backend.sign_in(&credentials).await {
    Ok(response) => response,
    Err(api_err) => {
      warn!(error = %api_err, "Sign-in call failed.");
      return Err(AuthError::Authentication(api_err));
    }
  };

  let Some(user) = response.user else {
    warn!("Sign-in response carried no user.");
    return Err(AuthError::Rejected);
  };

  event!(Level::INFO, user_id = %user.id, "Sign-in succeeded; storing user in session.");
  session.update(|data| data.user = Some(user))?;

  Ok(Redirect::home())
}
