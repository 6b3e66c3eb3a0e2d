// core/src/actions/mod.rs

//! Caller-facing authentication actions.
//!
//! Each action either finishes with a [`Redirect`] for the browser or hands
//! back an [`AuthError`](crate::AuthError) value; none of them panics or
//! retries.

pub mod current_user;
pub mod login;
pub mod logout;
pub mod validation;

pub use current_user::current_user;
pub use login::{login_or_register, LoginForm, LoginType};
pub use logout::logout;
pub use validation::{validate_password, validate_username};

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";

/// Instruction to send the browser somewhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
  location: String,
}

impl Redirect {
  pub fn to(location: impl Into<String>) -> Self {
    Self {
      location: location.into(),
    }
  }

  pub fn home() -> Self {
    Self::to(HOME_ROUTE)
  }

  pub fn login() -> Self {
    Self::to(LOGIN_ROUTE)
  }

  pub fn location(&self) -> &str {
    &self.location
  }
}
