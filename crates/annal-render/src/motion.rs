//! Ambient motion for the page: the velocity field and the typewriter
//! headline.
//!
//! The velocity field shows one drifting particle per recent event; particle
//! speed tracks the events-per-year figure. Paths and timing offsets are
//! derived from the particle index alone, so the output is deterministic.

use annal_core::stats::{RECENT_WINDOW_YEARS, TimelineStats};

use crate::svg::{SvgBuilder, coord};

const FIELD_WIDTH: u32 = 640;
const FIELD_HEIGHT: u32 = 120;
/// More particles than this stops reading as "a few recent events".
const MAX_PARTICLES: usize = 24;

/// The drifting-particle strip under the charts.
pub fn velocity_field(stats: &TimelineStats) -> String {
  let mut svg = SvgBuilder::new(
    "chart chart-velocity",
    FIELD_WIDTH,
    FIELD_HEIGHT,
    "Recent event velocity",
  );

  let velocity = stats.velocity();
  svg.text_el(
    "text",
    &[("class", "velocity-caption"), ("x", "16"), ("y", "24")],
    &format!(
      "{:.1} events per year over the last {RECENT_WINDOW_YEARS} years",
      velocity
    ),
  );

  let n = stats.recent.min(MAX_PARTICLES);
  if n == 0 {
    return svg.finish();
  }

  // Faster years sweep particles across quicker; clamp keeps the extremes
  // watchable.
  let dur = (30.0 / velocity).clamp(4.0, 40.0);
  let dur_attr = format!("{}s", coord(dur));

  for i in 0..n {
    let lane = 34.0 + ((i * 53) % 70) as f64;
    let drift = ((i * 29) % 40) as f64 - 20.0;
    let radius = (2 + i % 3).to_string();
    // Negative begin offsets scatter the particles mid-flight at load.
    let begin = format!("-{}s", coord(i as f64 * dur / n as f64));
    let path = format!(
      "M -12 {} q 332 {} 664 0",
      coord(lane),
      coord(drift)
    );

    svg.start(
      "circle",
      &[
        ("class", "particle"),
        ("r", radius.as_str()),
        ("cx", "0"),
        ("cy", "0"),
      ],
    );
    svg.empty(
      "animateMotion",
      &[
        ("dur", dur_attr.as_str()),
        ("begin", begin.as_str()),
        ("repeatCount", "indefinite"),
        ("path", path.as_str()),
      ],
    );
    svg.end("circle");
  }

  svg.finish()
}

/// Character width of the typewriter font, in viewBox units.
const CH: f64 = 10.2;
const SECS_PER_CHAR: f64 = 0.055;

/// The self-typing headline. A clip rectangle widens one character at a
/// time (`calcMode="discrete"`), with a blinking caret riding the edge.
pub fn typewriter(text: &str) -> String {
  let chars = text.chars().count();
  let width = (chars as f64 * CH).ceil() as u32 + 4;
  let mut svg = SvgBuilder::new("typewriter", width.max(4), 30, text);

  if chars == 0 {
    return svg.finish();
  }

  let steps: Vec<String> =
    (0..=chars).map(|i| coord(i as f64 * CH)).collect();
  let values = steps.join(";");
  let dur = format!("{}s", coord((chars as f64 * SECS_PER_CHAR).max(0.1)));

  svg.start("defs", &[]);
  svg.start("clipPath", &[("id", "typewriter-clip")]);
  svg.start(
    "rect",
    &[("x", "0"), ("y", "0"), ("width", "0"), ("height", "30")],
  );
  svg.empty(
    "animate",
    &[
      ("attributeName", "width"),
      ("values", values.as_str()),
      ("calcMode", "discrete"),
      ("dur", dur.as_str()),
      ("fill", "freeze"),
    ],
  );
  svg.end("rect");
  svg.end("clipPath");
  svg.end("defs");

  svg.text_el(
    "text",
    &[
      ("class", "typewriter-text"),
      ("x", "0"),
      ("y", "21"),
      ("clip-path", "url(#typewriter-clip)"),
    ],
    text,
  );

  svg.start(
    "rect",
    &[
      ("class", "typewriter-caret"),
      ("x", "0"),
      ("y", "4"),
      ("width", "2"),
      ("height", "20"),
    ],
  );
  svg.empty(
    "animate",
    &[
      ("attributeName", "x"),
      ("values", values.as_str()),
      ("calcMode", "discrete"),
      ("dur", dur.as_str()),
      ("fill", "freeze"),
    ],
  );
  svg.empty(
    "animate",
    &[
      ("attributeName", "opacity"),
      ("values", "1;0;1"),
      ("dur", "1s"),
      ("repeatCount", "indefinite"),
    ],
  );
  svg.end("rect");

  svg.finish()
}
