//! Error types and axum `IntoResponse` implementation.
//!
//! Subscription errors carry the CORS headers; without them a browser on
//! another origin cannot read the body.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::{CredentialFlags, handlers::cors_headers};

#[derive(Debug, Error)]
pub enum Error {
  #[error("valid email address required")]
  InvalidEmail,
  #[error("request body is not valid JSON: {0}")]
  Payload(#[source] serde_json::Error),
  #[error("subscriber backend credentials missing")]
  Misconfigured(CredentialFlags),
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
  #[error("event document not found")]
  EventsMissing,
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::InvalidEmail => (
        StatusCode::BAD_REQUEST,
        cors_headers(),
        Json(json!({ "error": "Valid email address required" })),
      )
        .into_response(),
      Error::Misconfigured(flags) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        cors_headers(),
        Json(json!({
          "error": "Server configuration error. Please contact admin.",
          "debug": flags.debug_map(),
        })),
      )
        .into_response(),
      Error::Payload(e) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        cors_headers(),
        Json(json!({
          "error": "Failed to subscribe. Please try again.",
          "details": e.to_string(),
        })),
      )
        .into_response(),
      Error::Store(e) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        cors_headers(),
        Json(json!({
          "error": "Failed to subscribe. Please try again.",
          "details": e.to_string(),
        })),
      )
        .into_response(),
      Error::EventsMissing => (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Event document not found" })),
      )
        .into_response(),
    }
  }
}
