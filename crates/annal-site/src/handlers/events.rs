//! The event document: loading for the page, and `GET /events.json`.

use std::path::Path;

use annal_core::{event::Timeline, store::SubscriberStore};
use axum::{
  body::Body,
  extract::State,
  http::{HeaderMap, StatusCode, header},
  response::Response,
};

use crate::{AppState, error::Error, etag};

/// Why the timeline could not be shown. The page renders the message in
/// place of the event list.
pub enum LoadError {
  /// The document could not be read.
  Unavailable,
  /// The document was read but did not parse.
  Malformed,
}

impl LoadError {
  pub fn message(&self) -> &'static str {
    match self {
      LoadError::Unavailable => {
        "Unable to load events. Please check your internet connection and \
         try again."
      }
      LoadError::Malformed => {
        "Failed to load events. Please try refreshing the page."
      }
    }
  }
}

/// Read and parse the event document. Called once per page view; the file
/// on disk is the source of truth and edits show up on the next request.
pub async fn load_timeline(path: &Path) -> Result<Timeline, LoadError> {
  let bytes = tokio::fs::read(path).await.map_err(|e| {
    tracing::warn!(path = %path.display(), error = %e, "failed to read event document");
    LoadError::Unavailable
  })?;
  Timeline::from_slice(&bytes).map_err(|e| {
    tracing::error!(path = %path.display(), error = %e, "event document is malformed");
    LoadError::Malformed
  })
}

/// `GET /events.json` — the document bytes, verbatim, with a strong ETag.
pub async fn document<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
) -> Result<Response, Error>
where
  S: SubscriberStore + Clone + Send + Sync + 'static,
{
  let bytes = tokio::fs::read(&state.config.events_path)
    .await
    .map_err(|_| Error::EventsMissing)?;

  let etag = etag::compute_etag(&bytes);
  let client_tag = headers
    .get(header::IF_NONE_MATCH)
    .and_then(|v| v.to_str().ok());
  if etag::none_match(client_tag, &etag) {
    return Ok(
      Response::builder()
        .status(StatusCode::NOT_MODIFIED)
        .header(header::ETAG, &etag)
        .body(Body::empty())
        .unwrap(),
    );
  }

  Ok(
    Response::builder()
      .status(StatusCode::OK)
      .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
      .header(header::ETAG, &etag)
      .header(header::CONTENT_LENGTH, bytes.len())
      .body(Body::from(bytes))
      .unwrap(),
  )
}
