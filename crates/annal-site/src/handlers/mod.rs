pub mod events;
pub mod pages;
pub mod subscribe;

use axum::http::{HeaderName, HeaderValue, header};

/// CORS headers attached to every `/api/subscribe` response, success or
/// failure. The endpoint accepts cross-origin posts from anywhere.
pub(crate) fn cors_headers() -> [(HeaderName, HeaderValue); 3] {
  [
    (
      header::ACCESS_CONTROL_ALLOW_ORIGIN,
      HeaderValue::from_static("*"),
    ),
    (
      header::ACCESS_CONTROL_ALLOW_HEADERS,
      HeaderValue::from_static("Content-Type"),
    ),
    (
      header::ACCESS_CONTROL_ALLOW_METHODS,
      HeaderValue::from_static("POST, OPTIONS"),
    ),
  ]
}
