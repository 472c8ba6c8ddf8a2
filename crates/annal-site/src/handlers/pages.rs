//! Handlers for the server-rendered pages.
//!
//! | Method | Path                | Notes                                  |
//! |--------|---------------------|----------------------------------------|
//! | `GET`  | `/`                 | Timeline page; `?filter=` narrows      |
//! | `GET`  | `/static/style.css` | Stylesheet, embedded at compile time   |
//! | `POST` | `/subscribe`        | Form fallback; re-renders with notice  |

use annal_core::{event::Filter, stats::TimelineStats, store::SubscriberStore};
use annal_render::{Banner, PageContext, TimelineSection, render_page};
use axum::{
  Form,
  extract::{Query, State},
  http::{HeaderMap, header},
  response::{Html, IntoResponse, Response},
};
use chrono::{Datelike, Utc};
use serde::Deserialize;

use crate::{
  AppState,
  error::Error,
  handlers::{events, subscribe},
};

// ─── Timeline page ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct PageQuery {
  /// One of `all`, `pivotal`, `major`, `notable`. Anything else shows all.
  pub filter: Option<String>,
}

/// `GET /?filter=<importance>`
pub async fn timeline<S>(
  State(state): State<AppState<S>>,
  Query(query): Query<PageQuery>,
) -> Html<String>
where
  S: SubscriberStore + Clone + Send + Sync + 'static,
{
  let filter = Filter::from_query(query.filter.as_deref());
  Html(render_timeline_page(&state, filter, None).await)
}

/// Render the full page. Statistics are computed fresh against the current
/// year, so the trailing-window share stays honest as the clock advances.
async fn render_timeline_page<S>(
  state: &AppState<S>,
  filter: Filter,
  banner: Option<Banner>,
) -> String
where
  S: SubscriberStore + Clone + Send + Sync + 'static,
{
  let title = &state.config.title;
  let tagline = &state.config.tagline;

  match events::load_timeline(&state.config.events_path).await {
    Ok(timeline) => {
      let stats = TimelineStats::compute(&timeline.events, Utc::now().year());
      render_page(&PageContext {
        title,
        tagline,
        filter,
        section: TimelineSection::Loaded {
          events: &timeline.events,
          stats:  &stats,
        },
        banner,
      })
    }
    Err(load_error) => render_page(&PageContext {
      title,
      tagline,
      filter,
      section: TimelineSection::Unavailable {
        message: load_error.message(),
      },
      banner,
    }),
  }
}

// ─── Stylesheet ───────────────────────────────────────────────────────────────

/// `GET /static/style.css`
pub async fn stylesheet() -> Response {
  (
    [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
    annal_render::STYLESHEET,
  )
    .into_response()
}

// ─── Form fallback ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
  #[serde(default)]
  pub email: String,
}

/// `POST /subscribe` — the no-script path. Runs the same pipeline as the
/// JSON API and answers with the page plus a notice instead of JSON.
pub async fn subscribe_form<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Form(form): Form<SubscribeForm>,
) -> Html<String>
where
  S: SubscriberStore + Clone + Send + Sync + 'static,
{
  use annal_core::subscriber::SubscribeOutcome;

  let email = form.email.trim().to_string();
  let banner =
    match subscribe::try_subscribe(&state, &headers, email).await {
      Ok(SubscribeOutcome::Subscribed) => Banner::Subscribed,
      Ok(SubscribeOutcome::AlreadySubscribed) => Banner::AlreadySubscribed,
      Err(Error::InvalidEmail) => Banner::Invalid,
      Err(error) => {
        tracing::error!(%error, "form subscription failed");
        Banner::Failed
      }
    };
  Html(render_timeline_page(&state, Filter::All, Some(banner)).await)
}
