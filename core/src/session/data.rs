// core/src/session/data.rs
use serde::{Deserialize, Serialize};

use crate::models::SignInUser;

/// Everything the encrypted session cookie carries: the signed-in user's
/// projection and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub user: Option<SignInUser>,
}

impl SessionData {
  pub fn is_authenticated(&self) -> bool {
    self.user.is_some()
  }
}
