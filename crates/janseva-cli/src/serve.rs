//! `serve-mock`: expose the fixture backend over HTTP.
//!
//! Every request hits one fallback handler that replays method, path, query
//! and body into a shared [`MockTransport`], so a live-mode client pointed at
//! this server sees exactly what mock mode would return.

use axum::{
  Json, Router,
  extract::State,
  http::{HeaderMap, Method, StatusCode, Uri, header::AUTHORIZATION},
  response::{IntoResponse, Response},
};
use bytes::Bytes;
use janseva_core::{ApiRequest, Error, Transport};
use janseva_mock::MockTransport;
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

/// Build the dev-server router around `transport`.
pub fn router(transport: MockTransport) -> Router {
  Router::new()
    .fallback(dispatch)
    .layer(TraceLayer::new_for_http())
    .with_state(transport)
}

async fn dispatch(
  State(transport): State<MockTransport>,
  method: Method,
  uri: Uri,
  headers: HeaderMap,
  body: Bytes,
) -> Response {
  let Ok(method) = method.as_str().parse::<janseva_core::Method>() else {
    let status = StatusCode::METHOD_NOT_ALLOWED;
    return error_response(status, "method_not_allowed", "unsupported method");
  };
  let endpoint = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());

  let mut request = ApiRequest::new(method, endpoint);
  if !body.is_empty() {
    match serde_json::from_slice::<Value>(&body) {
      Ok(value) => request.body = Some(value),
      Err(e) => {
        let message = format!("invalid JSON body: {e}");
        return error_response(StatusCode::BAD_REQUEST, "bad_request", &message);
      }
    }
  }
  request.bearer = headers
    .get(AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.strip_prefix("Bearer "))
    .map(str::to_owned);

  match transport.send(request).await {
    Ok(value) => (StatusCode::OK, Json(value)).into_response(),
    Err(e) => {
      let status = e
        .status()
        .and_then(|s| StatusCode::from_u16(s).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
      error_response(status, error_kind(&e), &e.to_string())
    }
  }
}

fn error_kind(e: &Error) -> &'static str {
  match e {
    Error::MockGap { .. } => "mock_gap",
    Error::Transport { status: Some(400), .. } => "bad_request",
    Error::Transport { status: Some(404), .. } => "not_found",
    Error::Transport { .. } => "transport",
    Error::Parse(_) | Error::Decode(_) => "invalid_payload",
    Error::Csv(_) => "report_encoding",
    Error::Storage(_) => "storage",
  }
}

fn error_response(status: StatusCode, error: &str, message: &str) -> Response {
  let body = json!({ "error": error, "message": message, "code": status.as_u16() });
  (status, Json(body)).into_response()
}
