//! Event types — the fundamental unit of the Annal timeline.
//!
//! Events are read from a single JSON document of the shape
//! `{ "events": [...] }` and are never mutated by the server; the document
//! is the source of truth and is re-read on every page view.

use serde::{Deserialize, Serialize};

use crate::Result;

// ─── Importance ──────────────────────────────────────────────────────────────

/// Editorial weight of an event. The serialised form is the lowercase variant
/// name, which doubles as the CSS class on the rendered timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
  Pivotal,
  Major,
  Notable,
}

impl Importance {
  pub const ALL: [Importance; 3] =
    [Importance::Pivotal, Importance::Major, Importance::Notable];

  /// The serialised (and CSS class) form.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Pivotal => "pivotal",
      Self::Major => "major",
      Self::Notable => "notable",
    }
  }
}

// ─── Filter ──────────────────────────────────────────────────────────────────

/// A visibility filter over the timeline. `All` shows every event; the other
/// variants show exactly the events of that importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
  #[default]
  All,
  Only(Importance),
}

impl Filter {
  /// Every selectable filter, in display order.
  pub const ALL: [Filter; 4] = [
    Filter::All,
    Filter::Only(Importance::Pivotal),
    Filter::Only(Importance::Major),
    Filter::Only(Importance::Notable),
  ];

  /// Parse a query-string value. Unrecognised or absent values fall back to
  /// `All` rather than erroring; a stale link should still render a page.
  pub fn from_query(value: Option<&str>) -> Filter {
    match value {
      Some("pivotal") => Filter::Only(Importance::Pivotal),
      Some("major") => Filter::Only(Importance::Major),
      Some("notable") => Filter::Only(Importance::Notable),
      _ => Filter::All,
    }
  }

  pub fn matches(&self, importance: Importance) -> bool {
    match self {
      Filter::All => true,
      Filter::Only(only) => *only == importance,
    }
  }

  /// The query-string value for this filter.
  pub fn as_str(&self) -> &'static str {
    match self {
      Filter::All => "all",
      Filter::Only(i) => i.as_str(),
    }
  }

  /// Human-readable label for the filter control.
  pub fn label(&self) -> &'static str {
    match self {
      Filter::All => "All Events",
      Filter::Only(Importance::Pivotal) => "Pivotal",
      Filter::Only(Importance::Major) => "Major",
      Filter::Only(Importance::Notable) => "Notable",
    }
  }
}

// ─── Event ───────────────────────────────────────────────────────────────────

/// A single timeline entry.
///
/// `date` is free-form text ("March 1956", "1843"); the year used for
/// statistics is extracted with [`Event::year`]. Events whose date yields no
/// year still render, but are excluded from year-based statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
  pub date:       String,
  pub name:       String,
  pub detail:     String,
  pub link:       String,
  pub importance: Importance,
}

impl Event {
  /// The event's year: the first run of four consecutive ASCII digits in
  /// `date`, if any.
  pub fn year(&self) -> Option<i32> {
    let bytes = self.date.as_bytes();
    let mut run = 0usize;
    for (i, b) in bytes.iter().enumerate() {
      if b.is_ascii_digit() {
        run += 1;
        if run == 4 {
          let start = i + 1 - 4;
          // Four ASCII digits always parse as i32.
          return self.date[start..=i].parse().ok();
        }
      } else {
        run = 0;
      }
    }
    None
  }
}

// ─── Timeline ────────────────────────────────────────────────────────────────

/// The parsed event document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
  pub events: Vec<Event>,
}

/// A problem found by [`Timeline::lint`]. Advisory only; a timeline with
/// issues still renders.
#[derive(Debug, Clone)]
pub struct Issue {
  /// Index of the offending event within the document.
  pub index:   usize,
  pub field:   &'static str,
  pub message: String,
}

impl Timeline {
  /// Parse the raw bytes of an event document.
  pub fn from_slice(bytes: &[u8]) -> Result<Timeline> {
    Ok(serde_json::from_slice(bytes)?)
  }

  /// Check every event for data problems: empty text fields, links that are
  /// not http(s), and dates that yield no year.
  pub fn lint(&self) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut push = |index, field, message: String| {
      issues.push(Issue {
        index,
        field,
        message,
      })
    };

    for (i, event) in self.events.iter().enumerate() {
      if event.name.trim().is_empty() {
        push(i, "name", "name is empty".into());
      }
      if event.detail.trim().is_empty() {
        push(i, "detail", "detail is empty".into());
      }
      if event.link.trim().is_empty() {
        push(i, "link", "link is empty".into());
      } else if !event.link.starts_with("http://")
        && !event.link.starts_with("https://")
      {
        push(i, "link", format!("link is not http(s): {}", event.link));
      }
      if event.year().is_none() {
        push(
          i,
          "date",
          format!("no four-digit year in date: {:?}", event.date),
        );
      }
    }

    issues
  }
}
