// core/src/client/api_client.rs

//! Thin JSON-over-HTTP wrapper used to reach the backend API.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use super::params::{build_params_from_object, Params};
use crate::error::ApiError;

/// Options for requests that carry their input in the query string (GET, DELETE).
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
  pub headers: HeaderMap,
  pub params: Params,
}

impl QueryOptions {
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends a query parameter. `None` and `""` values are dropped on send.
  pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
    self.params.push((key.into(), value.into()));
    self
  }

  pub fn header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
    self.headers.insert(name, value);
    self
  }
}

/// Options for requests that carry a JSON body (POST, PUT, PATCH).
#[derive(Debug, Clone)]
pub struct BodyOptions<B> {
  pub headers: HeaderMap,
  pub body: Option<B>,
}

impl<B> Default for BodyOptions<B> {
  fn default() -> Self {
    Self {
      headers: HeaderMap::new(),
      body: None,
    }
  }
}

impl<B: Serialize> BodyOptions<B> {
  pub fn json(body: B) -> Self {
    Self {
      headers: HeaderMap::new(),
      body: Some(body),
    }
  }

  pub fn header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
    self.headers.insert(name, value);
    self
  }
}

/// Bearer-authenticated JSON client.
///
/// The token is part of the value, not shared state: build a per-request
/// client with [`with_access_token`](ApiClient::with_access_token) from a
/// shared base. Cloning is cheap (the underlying `reqwest::Client` is an `Arc`).
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
  http: Client,
  access_token: String,
  reject_error_status: bool,
}

impl ApiClient {
  pub fn new(http: Client) -> Self {
    Self {
      http,
      access_token: String::new(),
      reject_error_status: false,
    }
  }

  pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
    self.access_token = access_token.into();
    self
  }

  /// When set, non-2xx responses fail with [`ApiError::Status`] instead of
  /// being parsed as if they succeeded.
  pub fn reject_error_status(mut self, reject: bool) -> Self {
    self.reject_error_status = reject;
    self
  }

  pub fn access_token(&self) -> &str {
    &self.access_token
  }

  pub async fn get<T: DeserializeOwned>(&self, url: &str, options: QueryOptions) -> Result<T, ApiError> {
    self.send_query(Method::GET, url, options).await
  }

  pub async fn delete<T: DeserializeOwned>(&self, url: &str, options: QueryOptions) -> Result<T, ApiError> {
    self.send_query(Method::DELETE, url, options).await
  }

  pub async fn post<B, T>(&self, url: &str, options: BodyOptions<B>) -> Result<T, ApiError>
  where
    B: Serialize,
    T: DeserializeOwned,
  {
    self.send_body(Method::POST, url, options).await
  }

  pub async fn put<B, T>(&self, url: &str, options: BodyOptions<B>) -> Result<T, ApiError>
  where
    B: Serialize,
    T: DeserializeOwned,
  {
    self.send_body(Method::PUT, url, options).await
  }

  pub async fn patch<B, T>(&self, url: &str, options: BodyOptions<B>) -> Result<T, ApiError>
  where
    B: Serialize,
    T: DeserializeOwned,
  {
    self.send_body(Method::PATCH, url, options).await
  }

  async fn send_query<T: DeserializeOwned>(
    &self,
    method: Method,
    url: &str,
    options: QueryOptions,
  ) -> Result<T, ApiError> {
    let full_url = format!("{}{}", url, build_params_from_object(&options.params));
    let headers = self.merge_headers(HeaderMap::new(), options.headers, &full_url)?;
    let request = self.http.request(method, &full_url).headers(headers);
    self.execute(request, &full_url).await
  }

  async fn send_body<B, T>(&self, method: Method, url: &str, options: BodyOptions<B>) -> Result<T, ApiError>
  where
    B: Serialize,
    T: DeserializeOwned,
  {
    let mut defaults = HeaderMap::new();
    defaults.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let headers = self.merge_headers(defaults, options.headers, url)?;

    let mut request = self.http.request(method, url).headers(headers);
    if let Some(body) = &options.body {
      let encoded = serde_json::to_vec(body).map_err(|source| ApiError::Encode {
        url: url.to_string(),
        source,
      })?;
      request = request.body(encoded);
    }
    self.execute(request, url).await
  }

  /// Defaults first, then the bearer token, then caller headers, which win.
  fn merge_headers(&self, mut headers: HeaderMap, overrides: HeaderMap, url: &str) -> Result<HeaderMap, ApiError> {
    let bearer = HeaderValue::from_str(&format!("Bearer {}", self.access_token)).map_err(|_| {
      debug!(url = %url, "Access token contains characters not allowed in a header.");
      ApiError::InvalidHeader {
        name: AUTHORIZATION.to_string(),
      }
    })?;
    headers.insert(AUTHORIZATION, bearer);
    headers.extend(overrides);
    Ok(headers)
  }

  #[instrument(name = "api_client::execute", skip_all, fields(url = %url), err(Display))]
  async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder, url: &str) -> Result<T, ApiError> {
    let transport = |source: reqwest::Error| ApiError::Transport {
      url: url.to_string(),
      source,
    };

    let response = request.send().await.map_err(transport)?;
    let status = response.status();
    debug!(status = status.as_u16(), "Backend responded.");

    let bytes = response.bytes().await.map_err(transport)?;

    if self.reject_error_status && !status.is_success() {
      return Err(ApiError::Status {
        url: url.to_string(),
        status: status.as_u16(),
        body: String::from_utf8_lossy(&bytes).into_owned(),
      });
    }

    serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
      url: url.to_string(),
      source,
    })
  }
}
