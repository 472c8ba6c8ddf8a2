//! Derived statistics over a set of events.
//!
//! Everything here is computed from the event list plus an explicit
//! `current_year`, so the results are deterministic and testable. Events
//! whose date yields no year (see [`Event::year`]) count toward totals but
//! are excluded from every year-based figure.

use crate::event::{Event, Importance};

/// Width of the "recent activity" window, in years. An event is recent when
/// `year >= current_year - RECENT_WINDOW_YEARS`.
pub const RECENT_WINDOW_YEARS: i32 = 5;

// ─── Tally ───────────────────────────────────────────────────────────────────

/// Event counts broken down by importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportanceTally {
  pub pivotal: usize,
  pub major:   usize,
  pub notable: usize,
}

impl ImportanceTally {
  pub fn of(&self, importance: Importance) -> usize {
    match importance {
      Importance::Pivotal => self.pivotal,
      Importance::Major => self.major,
      Importance::Notable => self.notable,
    }
  }

  fn bump(&mut self, importance: Importance) {
    match importance {
      Importance::Pivotal => self.pivotal += 1,
      Importance::Major => self.major += 1,
      Importance::Notable => self.notable += 1,
    }
  }
}

// ─── Decades ─────────────────────────────────────────────────────────────────

/// Event count for one decade. `start_year` is the decade's first year
/// (1956 buckets into 1950).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecadeBucket {
  pub start_year: i32,
  pub count:      usize,
}

fn decade_of(year: i32) -> i32 {
  year.div_euclid(10) * 10
}

// ─── Stats ───────────────────────────────────────────────────────────────────

/// The full set of figures the timeline page displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineStats {
  pub current_year: i32,
  /// All events, dated or not.
  pub total:        usize,
  pub tally:        ImportanceTally,
  /// Earliest extracted event year, if any event has one.
  pub first_year:   Option<i32>,
  /// Events falling inside the trailing window.
  pub recent:       usize,
  /// Per-decade counts from the earliest to the latest dated event,
  /// including empty decades in between. Empty when no event has a year.
  pub decades:      Vec<DecadeBucket>,
}

impl TimelineStats {
  pub fn compute(events: &[Event], current_year: i32) -> TimelineStats {
    let mut tally = ImportanceTally::default();
    let mut years = Vec::with_capacity(events.len());
    let mut recent = 0usize;

    for event in events {
      tally.bump(event.importance);
      if let Some(year) = event.year() {
        years.push(year);
        if year >= current_year - RECENT_WINDOW_YEARS {
          recent += 1;
        }
      }
    }

    let first_year = years.iter().copied().min();
    let last_year = years.iter().copied().max();

    let decades = match (first_year, last_year) {
      (Some(first), Some(last)) => {
        let mut buckets: Vec<DecadeBucket> = (decade_of(first)
          ..=decade_of(last))
          .step_by(10)
          .map(|start_year| DecadeBucket {
            start_year,
            count: 0,
          })
          .collect();
        for year in &years {
          let idx = ((decade_of(*year) - decade_of(first)) / 10) as usize;
          buckets[idx].count += 1;
        }
        buckets
      }
      _ => Vec::new(),
    };

    TimelineStats {
      current_year,
      total: events.len(),
      tally,
      first_year,
      recent,
      decades,
    }
  }

  /// Years covered by the timeline: from the earliest event year to the
  /// current year.
  pub fn span_years(&self) -> Option<i32> {
    self.first_year.map(|first| self.current_year - first)
  }

  /// Share of all events that fall in the trailing window, as a rounded
  /// percentage. Zero for an empty timeline.
  pub fn recent_share(&self) -> u8 {
    if self.total == 0 {
      return 0;
    }
    (100.0 * self.recent as f64 / self.total as f64).round() as u8
  }

  /// Events per year over the trailing window.
  pub fn velocity(&self) -> f64 {
    self.recent as f64 / RECENT_WINDOW_YEARS as f64
  }

  /// Running totals per decade, for the growth chart.
  pub fn cumulative(&self) -> Vec<DecadeBucket> {
    let mut sum = 0usize;
    self
      .decades
      .iter()
      .map(|bucket| {
        sum += bucket.count;
        DecadeBucket {
          start_year: bucket.start_year,
          count:      sum,
        }
      })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn event(date: &str, importance: Importance) -> Event {
    Event {
      date: date.to_string(),
      name: "n".to_string(),
      detail: "d".to_string(),
      link: "https://example.com".to_string(),
      importance,
    }
  }

  fn fixture(current_year: i32) -> Vec<Event> {
    vec![
      event("1956", Importance::Pivotal),
      event("March 1972", Importance::Notable),
      event(&format!("{}", current_year - 2), Importance::Major),
    ]
  }

  #[test]
  fn totals_and_tally() {
    let events = fixture(2026);
    let stats = TimelineStats::compute(&events, 2026);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.tally.pivotal, 1);
    assert_eq!(stats.tally.major, 1);
    assert_eq!(stats.tally.notable, 1);
    assert_eq!(stats.tally.of(Importance::Pivotal), 1);
  }

  #[test]
  fn span_runs_from_first_year_to_current() {
    let stats = TimelineStats::compute(&fixture(2026), 2026);
    assert_eq!(stats.first_year, Some(1956));
    assert_eq!(stats.span_years(), Some(70));
  }

  #[test]
  fn recent_share_rounds_like_the_page() {
    // 1 of 3 events in the window: 33.33 rounds to 33.
    let stats = TimelineStats::compute(&fixture(2026), 2026);
    assert_eq!(stats.recent, 1);
    assert_eq!(stats.recent_share(), 33);

    // 2 of 3: 66.67 rounds to 67.
    let mut events = fixture(2026);
    events.push(event("2025", Importance::Notable));
    events.remove(0);
    let stats = TimelineStats::compute(&events, 2026);
    assert_eq!(stats.recent_share(), 67);

    // Exact halves round up: 1 of 8 is 12.5.
    let mut events = vec![event("2026", Importance::Major)];
    events.extend((0..7).map(|_| event("1990", Importance::Notable)));
    let stats = TimelineStats::compute(&events, 2026);
    assert_eq!(stats.recent_share(), 13);
  }

  #[test]
  fn window_boundary_is_inclusive() {
    let events = vec![
      event("2021", Importance::Major),
      event("2020", Importance::Major),
    ];
    let stats = TimelineStats::compute(&events, 2026);
    // 2021 == 2026 - 5 is inside the window; 2020 is not.
    assert_eq!(stats.recent, 1);
  }

  #[test]
  fn undated_events_count_toward_total_only() {
    let events = vec![
      event("undated", Importance::Major),
      event("2026", Importance::Major),
    ];
    let stats = TimelineStats::compute(&events, 2026);
    assert_eq!(stats.total, 2);
    assert_eq!(stats.recent, 1);
    assert_eq!(stats.recent_share(), 50);
    assert_eq!(stats.decades.len(), 1);
  }

  #[test]
  fn decade_buckets_include_gaps() {
    let events = vec![
      event("1956", Importance::Pivotal),
      event("1958", Importance::Major),
      event("1972", Importance::Notable),
    ];
    let stats = TimelineStats::compute(&events, 2026);
    let got: Vec<(i32, usize)> = stats
      .decades
      .iter()
      .map(|b| (b.start_year, b.count))
      .collect();
    assert_eq!(got, vec![(1950, 2), (1960, 0), (1970, 1)]);
  }

  #[test]
  fn cumulative_is_a_running_total() {
    let events = vec![
      event("1956", Importance::Pivotal),
      event("1958", Importance::Major),
      event("1972", Importance::Notable),
    ];
    let stats = TimelineStats::compute(&events, 2026);
    let got: Vec<usize> = stats.cumulative().iter().map(|b| b.count).collect();
    assert_eq!(got, vec![2, 2, 3]);
  }

  #[test]
  fn empty_timeline_is_all_zeroes() {
    let stats = TimelineStats::compute(&[], 2026);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.recent_share(), 0);
    assert_eq!(stats.span_years(), None);
    assert!(stats.decades.is_empty());
    assert!(stats.cumulative().is_empty());
  }

  #[test]
  fn velocity_is_recent_over_window() {
    let events = vec![
      event("2025", Importance::Major),
      event("2024", Importance::Major),
      event("2023", Importance::Major),
    ];
    let stats = TimelineStats::compute(&events, 2026);
    assert!((stats.velocity() - 0.6).abs() < f64::EPSILON);
  }
}
