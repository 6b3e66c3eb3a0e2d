// demos/web_app/src/state.rs
use crate::config::AppConfig;
use hauss_auth::{AuthBackend, SessionCodec};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub session_codec: Arc<SessionCodec>,
  pub backend: Arc<dyn AuthBackend>,
}

impl AppState {
  pub fn new(config: &AppConfig, backend: Arc<dyn AuthBackend>) -> Self {
    let session_codec = Arc::new(SessionCodec::new(&config.session_secret, config.session_cookie.clone()));
    Self { session_codec, backend }
  }
}
