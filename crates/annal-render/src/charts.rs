//! Decade charts for the timeline page.
//!
//! Both charts are inline SVG with SMIL animation: bars grow on load, the
//! growth line draws itself in. Layout is fixed at a 640-unit viewBox and
//! scales in CSS.

use annal_core::stats::TimelineStats;

use crate::svg::{SvgBuilder, coord};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 220;
const MARGIN: f64 = 12.0;
const PLOT_TOP: f64 = 24.0;
const BASELINE: f64 = 180.0;
const LABEL_Y: f64 = 200.0;

/// Bar chart of events per decade, empty decades included.
pub fn decade_bars(stats: &TimelineStats) -> String {
  let mut svg = SvgBuilder::new(
    "chart chart-bars",
    WIDTH,
    HEIGHT,
    "Events per decade",
  );

  if stats.decades.is_empty() {
    chart_empty(&mut svg);
    return svg.finish();
  }

  let n = stats.decades.len();
  let slot = (WIDTH as f64 - 2.0 * MARGIN) / n as f64;
  let max = stats.decades.iter().map(|b| b.count).max().unwrap_or(0).max(1);
  // Thin out decade labels when the timeline spans many decades.
  let label_every = if n > 12 { 2 } else { 1 };

  for (i, bucket) in stats.decades.iter().enumerate() {
    let x = MARGIN + i as f64 * slot + slot * 0.2;
    let center = MARGIN + i as f64 * slot + slot * 0.5;
    let height = bucket.count as f64 / max as f64 * (BASELINE - PLOT_TOP);
    let top = BASELINE - height;
    let begin = format!("{}s", coord(i as f64 * 0.08));

    let (x, width) = (coord(x), coord(slot * 0.6));
    svg.start(
      "rect",
      &[
        ("class", "bar"),
        ("x", x.as_str()),
        ("y", coord(BASELINE).as_str()),
        ("width", width.as_str()),
        ("height", "0"),
        ("rx", "2"),
      ],
    );
    svg.empty(
      "animate",
      &[
        ("attributeName", "height"),
        ("from", "0"),
        ("to", coord(height).as_str()),
        ("dur", "0.6s"),
        ("begin", begin.as_str()),
        ("fill", "freeze"),
      ],
    );
    svg.empty(
      "animate",
      &[
        ("attributeName", "y"),
        ("from", coord(BASELINE).as_str()),
        ("to", coord(top).as_str()),
        ("dur", "0.6s"),
        ("begin", begin.as_str()),
        ("fill", "freeze"),
      ],
    );
    svg.end("rect");

    if bucket.count > 0 {
      svg.text_el(
        "text",
        &[
          ("class", "bar-count"),
          ("x", coord(center).as_str()),
          ("y", coord(top - 6.0).as_str()),
          ("text-anchor", "middle"),
        ],
        &bucket.count.to_string(),
      );
    }
    if i % label_every == 0 {
      svg.text_el(
        "text",
        &[
          ("class", "bar-label"),
          ("x", coord(center).as_str()),
          ("y", coord(LABEL_Y).as_str()),
          ("text-anchor", "middle"),
        ],
        &format!("{}s", bucket.start_year),
      );
    }
  }

  svg.finish()
}

/// Line chart of the cumulative event count per decade.
pub fn growth_line(stats: &TimelineStats) -> String {
  let mut svg = SvgBuilder::new(
    "chart chart-growth",
    WIDTH,
    HEIGHT,
    "Cumulative events over time",
  );

  let cumulative = stats.cumulative();
  if cumulative.is_empty() {
    chart_empty(&mut svg);
    return svg.finish();
  }

  let n = cumulative.len();
  let slot = (WIDTH as f64 - 2.0 * MARGIN) / n as f64;
  let total = cumulative.last().map(|b| b.count).unwrap_or(0).max(1);

  let points: Vec<(f64, f64)> = cumulative
    .iter()
    .enumerate()
    .map(|(i, bucket)| {
      let x = MARGIN + i as f64 * slot + slot * 0.5;
      let y = BASELINE
        - bucket.count as f64 / total as f64 * (BASELINE - PLOT_TOP);
      (x, y)
    })
    .collect();

  if n >= 2 {
    let attr: Vec<String> = points
      .iter()
      .map(|(x, y)| format!("{},{}", coord(*x), coord(*y)))
      .collect();
    let length: f64 = points
      .windows(2)
      .map(|w| {
        let (x0, y0) = w[0];
        let (x1, y1) = w[1];
        ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt()
      })
      .sum();
    let dash = coord(length);

    let points_attr = attr.join(" ");
    svg.start(
      "polyline",
      &[
        ("class", "growth"),
        ("fill", "none"),
        ("points", points_attr.as_str()),
        ("stroke-dasharray", dash.as_str()),
        ("stroke-dashoffset", dash.as_str()),
      ],
    );
    svg.empty(
      "animate",
      &[
        ("attributeName", "stroke-dashoffset"),
        ("from", dash.as_str()),
        ("to", "0"),
        ("dur", "1.4s"),
        ("fill", "freeze"),
      ],
    );
    svg.end("polyline");
  }

  for (i, (x, y)) in points.iter().enumerate() {
    let begin = format!("{}s", coord(i as f64 * 1.4 / n as f64));
    svg.start(
      "circle",
      &[
        ("class", "dot"),
        ("cx", coord(*x).as_str()),
        ("cy", coord(*y).as_str()),
        ("r", "2.5"),
        ("opacity", "0"),
      ],
    );
    svg.empty(
      "animate",
      &[
        ("attributeName", "opacity"),
        ("from", "0"),
        ("to", "1"),
        ("dur", "0.3s"),
        ("begin", begin.as_str()),
        ("fill", "freeze"),
      ],
    );
    svg.end("circle");
  }

  // First and last decade labels plus the final total.
  let first = &cumulative[0];
  let last = &cumulative[n - 1];
  let (first_x, _) = points[0];
  let (last_x, last_y) = points[n - 1];
  svg.text_el(
    "text",
    &[
      ("class", "growth-label"),
      ("x", coord(first_x).as_str()),
      ("y", coord(LABEL_Y).as_str()),
      ("text-anchor", "middle"),
    ],
    &format!("{}s", first.start_year),
  );
  if n >= 2 {
    svg.text_el(
      "text",
      &[
        ("class", "growth-label"),
        ("x", coord(last_x).as_str()),
        ("y", coord(LABEL_Y).as_str()),
        ("text-anchor", "middle"),
      ],
      &format!("{}s", last.start_year),
    );
  }
  svg.text_el(
    "text",
    &[
      ("class", "growth-total"),
      ("x", coord(last_x).as_str()),
      ("y", coord(last_y - 10.0).as_str()),
      ("text-anchor", "middle"),
    ],
    &last.count.to_string(),
  );

  svg.finish()
}

fn chart_empty(svg: &mut SvgBuilder) {
  svg.text_el(
    "text",
    &[
      ("class", "chart-empty"),
      ("x", "320"),
      ("y", "110"),
      ("text-anchor", "middle"),
    ],
    "No dated events yet.",
  );
}

#[cfg(test)]
mod tests {
  use annal_core::event::{Event, Importance};

  use super::*;

  fn stats(dates: &[&str]) -> TimelineStats {
    let events: Vec<Event> = dates
      .iter()
      .map(|date| Event {
        date:       date.to_string(),
        name:       "n".to_string(),
        detail:     "d".to_string(),
        link:       "https://example.com".to_string(),
        importance: Importance::Notable,
      })
      .collect();
    TimelineStats::compute(&events, 2026)
  }

  #[test]
  fn one_bar_per_decade_including_gaps() {
    let out = decade_bars(&stats(&["1956", "1958", "1972"]));
    assert_eq!(out.matches("class=\"bar\"").count(), 3, "got:\n{out}");
    assert!(out.contains(">1950s</text>"), "got:\n{out}");
    assert!(out.contains(">1970s</text>"), "got:\n{out}");
  }

  #[test]
  fn tallest_bar_fills_the_plot() {
    let out = decade_bars(&stats(&["1956", "1958", "1972"]));
    // Two events in the 1950s is the max; its bar spans the full plot height.
    assert!(out.contains("to=\"156\""), "got:\n{out}");
    // Bars start staggered.
    assert!(out.contains("begin=\"0.08s\""), "got:\n{out}");
  }

  #[test]
  fn bars_placeholder_without_dated_events() {
    let out = decade_bars(&stats(&["undated"]));
    assert!(!out.contains("class=\"bar\""), "got:\n{out}");
    assert!(out.contains("No dated events yet."), "got:\n{out}");
  }

  #[test]
  fn growth_line_draws_itself_in() {
    let out = growth_line(&stats(&["1956", "1958", "1972"]));
    assert_eq!(out.matches("class=\"dot\"").count(), 3, "got:\n{out}");
    assert!(out.contains("<polyline"), "got:\n{out}");
    assert!(
      out.contains("attributeName=\"stroke-dashoffset\""),
      "got:\n{out}"
    );
    // Final cumulative total is annotated.
    assert!(out.contains(">3</text>"), "got:\n{out}");
  }

  #[test]
  fn single_decade_growth_is_a_lone_dot() {
    let out = growth_line(&stats(&["1956"]));
    assert!(!out.contains("<polyline"), "got:\n{out}");
    assert_eq!(out.matches("class=\"dot\"").count(), 1, "got:\n{out}");
  }

  #[test]
  fn growth_placeholder_without_dated_events() {
    let out = growth_line(&stats(&[]));
    assert!(out.contains("No dated events yet."), "got:\n{out}");
  }
}
