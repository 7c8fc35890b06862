//! [`HttpTransport`]: the live-backend [`Transport`].

use std::time::Duration;

use janseva_core::{ApiRequest, Error, Method, Result, Transport};
use reqwest::{
  Client, Response, StatusCode,
  header::{ACCEPT, CONTENT_TYPE},
};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Structured error body: `{ error, message, code }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
  #[serde(default)]
  error:   Option<String>,
  #[serde(default)]
  message: Option<String>,
}

/// Sends JSON requests to a fixed base URL.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based. The timeout
/// is enforced by reqwest; the client adds no timing logic of its own.
#[derive(Debug, Clone)]
pub struct HttpTransport {
  client:   Client,
  base_url: String,
}

impl HttpTransport {
  pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
    let client = Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|e| Error::transport(None, format!("failed to build HTTP client: {e}")))?;
    Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
  }

  pub fn base_url(&self) -> &str { &self.base_url }
}

impl Transport for HttpTransport {
  async fn send(&self, request: ApiRequest) -> Result<Value> {
    let url    = format!("{}{}", self.base_url, request.endpoint);
    let method = match request.method {
      Method::Get => reqwest::Method::GET,
      Method::Post => reqwest::Method::POST,
      Method::Put => reqwest::Method::PUT,
      Method::Delete => reqwest::Method::DELETE,
    };

    let mut builder = self
      .client
      .request(method, &url)
      .header(CONTENT_TYPE, "application/json")
      .header(ACCEPT, "application/json");
    if let Some(token) = &request.bearer {
      builder = builder.bearer_auth(token);
    }
    if let Some(body) = &request.body {
      builder = builder.json(body);
    }

    tracing::debug!(method = %request.method, %url, "http request");
    let response = builder.send().await.map_err(|e| {
      let message = format!("{} {} failed: {e}", request.method, request.endpoint);
      Error::transport(e.status().map(|s| s.as_u16()), message)
    })?;
    read_response(response).await
  }
}

/// Turn a response into JSON.
///
/// * non-2xx → [`Error::Transport`] carrying the body's `message` (or
///   `error`), else the raw text, else the status line;
/// * zero content-length, a non-JSON content type or a blank body → `{}`;
/// * anything else must parse as JSON or it is an [`Error::Parse`].
async fn read_response(response: Response) -> Result<Value> {
  let status         = response.status();
  let content_length = response.content_length();
  let is_json        = response
    .headers()
    .get(CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
    .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"));

  let text = response
    .text()
    .await
    .map_err(|e| Error::transport(status.as_u16(), format!("failed to read response body: {e}")))?;

  if !status.is_success() {
    return Err(error_from_body(status, &text));
  }
  if content_length == Some(0) || !is_json || text.trim().is_empty() {
    return Ok(Value::Object(Map::new()));
  }
  serde_json::from_str(&text).map_err(Error::Parse)
}

fn error_from_body(status: StatusCode, text: &str) -> Error {
  let structured = serde_json::from_str::<ErrorBody>(text)
    .ok()
    .and_then(|body| body.message.or(body.error))
    .filter(|m| !m.trim().is_empty());
  let raw = Some(text.trim()).filter(|t| !t.is_empty()).map(str::to_owned);
  let message = structured.or(raw).unwrap_or_else(|| status.to_string());
  Error::transport(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
  };

  use super::*;

  async fn transport(server: &MockServer) -> HttpTransport {
    HttpTransport::new(&server.uri(), Duration::from_secs(5)).expect("transport")
  }

  #[tokio::test]
  async fn sends_json_headers_and_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/applications"))
      .and(query_param("status", "Pending"))
      .and(header("authorization", "Bearer tok-123"))
      .and(header("content-type", "application/json"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
      .expect(1)
      .mount(&server)
      .await;

    let req = ApiRequest::get("/applications?status=Pending").bearer(Some("tok-123".into()));
    let value = transport(&server).await.send(req).await.unwrap();
    assert_eq!(value, json!({ "data": [] }));
  }

  #[tokio::test]
  async fn omits_authorization_without_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/auth/otp/request"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "OTP sent" })))
      .mount(&server)
      .await;

    let req = ApiRequest::post("/auth/otp/request").json(&json!({ "mobile_number": "1" })).unwrap();
    transport(&server).await.send(req).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].headers.get("authorization").is_none());
    let body: Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body, json!({ "mobile_number": "1" }));
  }

  #[tokio::test]
  async fn zero_length_success_is_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
      .and(path("/voters/3"))
      .respond_with(ResponseTemplate::new(200))
      .mount(&server)
      .await;

    let value = transport(&server).await.send(ApiRequest::delete("/voters/3")).await.unwrap();
    assert_eq!(value, json!({}));
  }

  #[tokio::test]
  async fn no_content_is_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
      .respond_with(ResponseTemplate::new(204))
      .mount(&server)
      .await;

    let value = transport(&server).await.send(ApiRequest::put("/schemes/x")).await.unwrap();
    assert_eq!(value, json!({}));
  }

  #[tokio::test]
  async fn non_json_content_type_is_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
      .mount(&server)
      .await;

    let value = transport(&server).await.send(ApiRequest::get("/ping")).await.unwrap();
    assert_eq!(value, json!({}));
  }

  #[tokio::test]
  async fn malformed_json_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
      .mount(&server)
      .await;

    let err = transport(&server).await.send(ApiRequest::get("/voters")).await.unwrap_err();
    assert!(matches!(err, Error::Parse(_)), "got {err:?}");
  }

  #[tokio::test]
  async fn structured_error_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(422).set_body_json(json!({
        "error": "validation_failed",
        "message": "district_id must be positive",
        "code": 4221
      })))
      .mount(&server)
      .await;

    let err = transport(&server).await.send(ApiRequest::get("/voters")).await.unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert_eq!(err.to_string(), "district_id must be positive");
  }

  #[tokio::test]
  async fn error_falls_back_to_raw_text_then_status_line() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/raw"))
      .respond_with(ResponseTemplate::new(502).set_body_string("upstream unavailable"))
      .mount(&server)
      .await;
    Mock::given(method("GET"))
      .and(path("/bare"))
      .respond_with(ResponseTemplate::new(404))
      .mount(&server)
      .await;

    let t = transport(&server).await;
    let raw = t.send(ApiRequest::get("/raw")).await.unwrap_err();
    assert_eq!(raw.to_string(), "upstream unavailable");

    let bare = t.send(ApiRequest::get("/bare")).await.unwrap_err();
    assert_eq!(bare.status(), Some(404));
    assert_eq!(bare.to_string(), "404 Not Found");
  }

  #[tokio::test]
  async fn connection_failure_is_a_transport_error() {
    // Nothing listens on port 9 of the loopback interface.
    let t = HttpTransport::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    let err = t.send(ApiRequest::get("/applications")).await.unwrap_err();
    assert!(matches!(err, Error::Transport { status: None, .. }), "got {err:?}");
  }

  #[test]
  fn trailing_slash_is_trimmed_from_base_url() {
    let t = HttpTransport::new("https://example.test/v1/", Duration::from_secs(1)).unwrap();
    assert_eq!(t.base_url(), "https://example.test/v1");
  }
}
