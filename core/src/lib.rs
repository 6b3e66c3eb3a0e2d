// src/lib.rs

//! hauss-auth: the authentication boundary of the Hauss web frontend.
//!
//! The crate glues three things together:
//!  - An encrypted, cookie-backed session holding the signed-in user projection.
//!  - A bearer-token JSON client for the remote backend API.
//!  - Login / logout / current-user actions that tie the two together.

pub mod actions;
pub mod backend;
pub mod client;
pub mod error;
pub mod models;
pub mod session;

// --- Re-exports for the Public API ---

pub use crate::actions::{
  current_user, login_or_register, logout, LoginForm, LoginType, Redirect, HOME_ROUTE, LOGIN_ROUTE,
};
pub use crate::backend::{AuthBackend, Credentials, RemoteAuthBackend};
pub use crate::client::{build_params_from_object, ApiClient, BodyOptions, QueryOptions};
pub use crate::error::{ApiError, AuthError, AuthResult, SessionError};
pub use crate::models::{SignInResponse, SignInTokens, SignInUser, User, UserStatus, UserType};
pub use crate::session::{
  CookieSession, SessionCodec, SessionCookieSettings, SessionData, SessionSecret, SessionStore,
};

/*
    Request flow:
    1. Build one `SessionCodec` at startup from the configured `SessionSecret`.
    2. Per request, `CookieSession::load(codec, incoming_cookie)`.
    3. Run an action (`login_or_register`, `current_user`, `logout`).
    4. If `take_pending_cookie()` yields a cookie, set it on the response.
*/
