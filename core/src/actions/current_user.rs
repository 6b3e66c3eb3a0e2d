// core/src/actions/current_user.rs
use tracing::{debug, error, warn};

use crate::error::AuthError;
use crate::models::SignInUser;
use crate::session::SessionStore;

/// Returns the user stored in the session.
///
/// A session without a user is cleared and reported as
/// [`AuthError::SessionMissing`], whose [`redirect`](AuthError::redirect)
/// points at the login route. Reading never writes the session.
pub fn current_user<S: SessionStore>(session: &S) -> Result<SignInUser, AuthError> {
  if let Some(user) = session.get().user {
    debug!(user_id = %user.id, "Session user found.");
    return Ok(user);
  }

  warn!("No user in session; clearing it.");
  if let Err(e) = session.clear_user() {
    // Still unauthenticated either way.
    error!(error = %e, "Failed to clear session after missing user.");
  }
  Err(AuthError::SessionMissing)
}
