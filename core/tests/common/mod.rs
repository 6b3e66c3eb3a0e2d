// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use actix_web::cookie::{Cookie, CookieJar, Key};
use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use async_trait::async_trait;
use hauss_auth::{
  ApiError, AuthBackend, CookieSession, Credentials, SessionCodec, SessionCookieSettings, SessionData, SessionSecret,
  SessionStore, SignInResponse, SignInTokens, SignInUser, UserStatus, UserType,
};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

pub const TEST_SECRET: &str = "a-test-secret-that-is-long-enough-for-aes";
pub const OTHER_SECRET: &str = "another-secret-that-is-also-long-enough-ok";

// --- Fixtures ---
pub fn sample_user() -> SignInUser {
  SignInUser {
    id: "64f0c2a1".to_string(),
    uuid: Some("0d6f7a52-3f2e-4b7e-9a51-2f4f1b7f1c11".to_string()),
    email: "buyer@example.com".to_string(),
    user_type: UserType::Buyer,
    name: "Ada Buyer".to_string(),
    status: UserStatus::Verified,
  }
}

pub fn other_user() -> SignInUser {
  SignInUser {
    id: "5511aa02".to_string(),
    uuid: None,
    email: "seller@example.com".to_string(),
    user_type: UserType::Seller,
    name: "Sam Seller".to_string(),
    status: UserStatus::Unverified,
  }
}

pub fn sample_tokens() -> SignInTokens {
  SignInTokens {
    access_token: "access-abc".to_string(),
    refresh_token: "refresh-def".to_string(),
    expires_in: "1h".to_string(),
  }
}

pub fn codec_with(secret: &str) -> Arc<SessionCodec> {
  let secret = SessionSecret::new(secret).expect("test secret is long enough");
  Arc::new(SessionCodec::new(&secret, SessionCookieSettings::default()))
}

pub fn test_codec() -> Arc<SessionCodec> {
  codec_with(TEST_SECRET)
}

/// A session as it would arrive on a request that carries no cookie.
pub fn empty_session() -> CookieSession {
  CookieSession::load(test_codec(), None)
}

/// A session as it would arrive on a request whose cookie holds `data`.
pub fn session_with(data: SessionData) -> CookieSession {
  let codec = test_codec();
  let cookie = codec.seal(&data).expect("seal fixture session");
  CookieSession::load(codec, Some(&cookie))
}

pub fn signed_in_session() -> CookieSession {
  session_with(SessionData {
    user: Some(sample_user()),
  })
}

pub fn decode_error() -> ApiError {
  let source = serde_json::from_str::<Value>("<html>").unwrap_err();
  ApiError::Decode {
    url: "http://backend.test/auth/signin".to_string(),
    source,
  }
}

// --- Mock backend ---
pub enum MockOutcome {
  Respond(SignInResponse),
  Fail,
}

pub struct MockBackend {
  outcome: MockOutcome,
  calls: AtomicUsize,
  last_credentials: Mutex<Option<Credentials>>,
}

impl MockBackend {
  pub fn new(outcome: MockOutcome) -> Self {
    Self {
      outcome,
      calls: AtomicUsize::new(0),
      last_credentials: Mutex::new(None),
    }
  }

  pub fn succeeding() -> Self {
    Self::new(MockOutcome::Respond(SignInResponse {
      user: Some(sample_user()),
      tokens: Some(sample_tokens()),
    }))
  }

  pub fn failing() -> Self {
    Self::new(MockOutcome::Fail)
  }

  pub fn without_user() -> Self {
    Self::new(MockOutcome::Respond(SignInResponse::default()))
  }

  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }

  pub fn last_credentials(&self) -> Option<Credentials> {
    self.last_credentials.lock().clone()
  }
}

#[async_trait]
impl AuthBackend for MockBackend {
  async fn sign_in(&self, credentials: &Credentials) -> Result<SignInResponse, ApiError> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    *self.last_credentials.lock() = Some(credentials.clone());
    match &self.outcome {
      MockOutcome::Respond(response) => Ok(response.clone()),
      MockOutcome::Fail => Err(decode_error()),
    }
  }
}

// --- Stand-in backend over real HTTP ---

/// What the echo endpoint saw.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Echo {
  pub method: String,
  pub query: String,
  pub authorization: Option<String>,
  pub content_type: Option<String>,
  pub x_trace: Option<String>,
  pub body: Value,
}

async fn echo(req: HttpRequest, body: web::Bytes) -> HttpResponse {
  let header = |name: &str| {
    req
      .headers()
      .get(name)
      .and_then(|v| v.to_str().ok())
      .map(str::to_string)
  };
  let parsed_body = if body.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice::<Value>(&body).unwrap_or(Value::String("<unparseable>".to_string()))
  };
  HttpResponse::Ok().json(json!({
    "method": req.method().as_str(),
    "query": req.query_string(),
    "authorization": header("authorization"),
    "contentType": header("content-type"),
    "xTrace": header("x-trace"),
    "body": parsed_body,
  }))
}

async fn with_status(path: web::Path<u16>) -> HttpResponse {
  let status = StatusCode::from_u16(path.into_inner()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
  HttpResponse::build(status).json(json!({ "statusCode": status.as_u16(), "message": "Unauthorized" }))
}

async fn plain_text() -> HttpResponse {
  HttpResponse::Ok().content_type("text/plain").body("definitely not json")
}

async fn sign_in(body: web::Json<Value>) -> HttpResponse {
  if body["email"] == "buyer@example.com" && body["password"] == "hunter22" {
    HttpResponse::Ok().json(json!({
      "user": sample_user(),
      "tokens": sample_tokens(),
    }))
  } else {
    HttpResponse::Unauthorized().json(json!({ "statusCode": 401, "message": "Invalid credentials" }))
  }
}

pub struct TestServer {
  pub base_url: String,
  handle: ServerHandle,
}

impl TestServer {
  pub fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }

  pub async fn stop(self) {
    self.handle.stop(false).await;
  }
}

/// Starts a throwaway backend on an ephemeral port. Must run inside `#[actix_web::test]`.
pub fn start_test_backend() -> TestServer {
  let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
  let addr = listener.local_addr().expect("local addr");
  let server = HttpServer::new(|| {
    App::new()
      .route("/echo", web::to(echo))
      .route("/status/{code}", web::to(with_status))
      .route("/text", web::get().to(plain_text))
      .route("/auth/signin", web::post().to(sign_in))
  })
  .workers(1)
  .disable_signals()
  .listen(listener)
  .expect("listen on ephemeral port")
  .run();

  let handle = server.handle();
  actix_web::rt::spawn(server);
  TestServer {
    base_url: format!("http://{}", addr),
    handle,
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub fn stored_user(session: &CookieSession) -> Option<SignInUser> {
  session.get().user
}

/// Decrypted JSON text of a cookie sealed under [`TEST_SECRET`].
pub fn plain_payload(cookie: &Cookie<'static>) -> String {
  let mut jar = CookieJar::new();
  jar.add_original(cookie.clone());
  jar
    .private(&Key::derive_from(TEST_SECRET.as_bytes()))
    .get(cookie.name())
    .expect("cookie sealed under TEST_SECRET")
    .value()
    .to_string()
}
