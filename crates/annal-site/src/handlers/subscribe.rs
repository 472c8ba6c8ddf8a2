//! Handlers for the subscription API.
//!
//! | Method    | Path             | Notes                                   |
//! |-----------|------------------|-----------------------------------------|
//! | `POST`    | `/api/subscribe` | Body `{"email": ...}`; JSON reply       |
//! | `OPTIONS` | `/api/subscribe` | CORS preflight, empty 200               |
//! | other     | `/api/subscribe` | 405 with a JSON error                   |
//!
//! Every response from this module carries the CORS headers.

use annal_core::{
  store::SubscriberStore,
  subscriber::{NewSubscriber, SubscribeOutcome, plausible_email},
};
use axum::{
  Json,
  body::Bytes,
  extract::State,
  http::{HeaderMap, StatusCode},
  response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::{AppState, error::Error, handlers::cors_headers};

#[derive(Debug, Deserialize)]
struct SubscribeBody {
  #[serde(default)]
  email: Option<String>,
}

/// `POST /api/subscribe`
///
/// The body is taken as raw bytes and parsed by hand so an unparseable
/// payload lands in the generic failure path with the parser's message
/// attached, instead of an extractor rejection without CORS headers.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  body: Bytes,
) -> Result<Response, Error>
where
  S: SubscriberStore + Clone + Send + Sync + 'static,
{
  let body: SubscribeBody =
    serde_json::from_slice(&body).map_err(Error::Payload)?;
  let email = body.email.unwrap_or_default();

  let outcome = try_subscribe(&state, &headers, email).await?;
  let payload = match outcome {
    SubscribeOutcome::Subscribed => json!({
      "message": "Successfully subscribed!",
      "status":  "success",
    }),
    SubscribeOutcome::AlreadySubscribed => json!({
      "message": "Already subscribed",
      "status":  "existing",
    }),
  };
  Ok((StatusCode::OK, cors_headers(), Json(payload)).into_response())
}

/// Validation and dispatch shared by the JSON API and the HTML form.
///
/// Order matters: the email check and then the credential check both run
/// before anything touches the network.
pub(crate) async fn try_subscribe<S>(
  state: &AppState<S>,
  headers: &HeaderMap,
  email: String,
) -> Result<SubscribeOutcome, Error>
where
  S: SubscriberStore + Clone + Send + Sync + 'static,
{
  if !plausible_email(&email) {
    return Err(Error::InvalidEmail);
  }

  let Some(store) = state.store.as_ref() else {
    let flags = state.config.credential_flags();
    tracing::error!(?flags, "subscription refused: backend credentials missing");
    return Err(Error::Misconfigured(flags));
  };

  let subscriber = NewSubscriber {
    email,
    subscribed_at: Utc::now(),
    ip: client_ip(headers),
  };
  store
    .subscribe(subscriber)
    .await
    .map_err(|e| Error::Store(Box::new(e)))
}

/// Client address for the audit column: `X-Forwarded-For` as received,
/// then `X-Real-IP`, then `"unknown"`.
fn client_ip(headers: &HeaderMap) -> String {
  for name in ["x-forwarded-for", "x-real-ip"] {
    if let Some(value) = headers.get(name).and_then(|v| v.to_str().ok()) {
      if !value.trim().is_empty() {
        return value.trim().to_string();
      }
    }
  }
  "unknown".to_string()
}

/// `OPTIONS /api/subscribe` — CORS preflight.
pub async fn preflight() -> Response {
  (StatusCode::OK, cors_headers()).into_response()
}

/// Any other method on `/api/subscribe`.
pub async fn method_not_allowed() -> Response {
  (
    StatusCode::METHOD_NOT_ALLOWED,
    cors_headers(),
    Json(json!({ "error": "Method not allowed" })),
  )
    .into_response()
}
