// core/src/actions/logout.rs
use tracing::{info, instrument};

use super::Redirect;
use crate::error::SessionError;
use crate::session::SessionStore;

/// Clears the session's user and sends the browser to the login route.
#[instrument(name = "actions::logout", skip(session), err(Display))]
pub fn logout<S: SessionStore>(session: &S) -> Result<Redirect, SessionError> {
  let had_user = session.get().is_authenticated();
  session.clear_user()?;
  info!(had_user, "Session cleared.");
  Ok(Redirect::login())
}
