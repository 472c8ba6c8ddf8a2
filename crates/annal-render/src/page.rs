//! The timeline page itself.
//!
//! One public entry point, [`render_page`], builds the whole document from a
//! [`PageContext`]. Filtering happens here: every event is considered, only
//! those matching the active filter are written out, and the statistics and
//! charts always cover the full set regardless of filter.

use annal_core::{
  event::{Event, Filter},
  stats::{RECENT_WINDOW_YEARS, TimelineStats},
};

use crate::{charts, motion};

// ─── Inputs ──────────────────────────────────────────────────────────────────

pub struct PageContext<'a> {
  pub title:   &'a str,
  pub tagline: &'a str,
  pub filter:  Filter,
  pub section: TimelineSection<'a>,
  pub banner:  Option<Banner>,
}

/// What the timeline area shows: the events, or why there are none.
pub enum TimelineSection<'a> {
  Loaded {
    events: &'a [Event],
    stats:  &'a TimelineStats,
  },
  Unavailable {
    message: &'a str,
  },
}

/// Feedback shown above the subscribe form after a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
  Subscribed,
  AlreadySubscribed,
  Invalid,
  Failed,
}

impl Banner {
  pub fn message(&self) -> &'static str {
    match self {
      Self::Subscribed => {
        "Successfully subscribed! You'll be notified when AI discovers new \
         milestones."
      }
      Self::AlreadySubscribed => "You're already subscribed!",
      Self::Invalid => "Please enter a valid email address",
      Self::Failed => "Failed to subscribe. Please try again later.",
    }
  }

  fn css_class(&self) -> &'static str {
    match self {
      Self::Subscribed => "notice notice-success",
      Self::AlreadySubscribed => "notice notice-info",
      Self::Invalid | Self::Failed => "notice notice-error",
    }
  }
}

// ─── Rendering ───────────────────────────────────────────────────────────────

pub fn render_page(ctx: &PageContext) -> String {
  let mut out = String::with_capacity(16 * 1024);

  out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
  out.push_str("<meta charset=\"utf-8\">\n");
  out.push_str(
    "<meta name=\"viewport\" content=\"width=device-width, \
     initial-scale=1\">\n",
  );
  out.push_str(&format!("<title>{}</title>\n", esc(ctx.title)));
  out.push_str("<link rel=\"stylesheet\" href=\"/static/style.css\">\n");
  out.push_str("</head>\n<body>\n");

  header(&mut out, ctx);

  match &ctx.section {
    TimelineSection::Loaded { events, stats } => {
      stats_strip(&mut out, stats);
      if stats.total > 0 {
        charts_section(&mut out, stats);
      }
      filter_nav(&mut out, ctx.filter);
      timeline(&mut out, events, ctx.filter);
    }
    TimelineSection::Unavailable { message } => {
      filter_nav(&mut out, ctx.filter);
      out.push_str(&format!(
        "<section class=\"timeline\" id=\"timeline\">\n<div \
         class=\"load-error\"><p>{}</p></div>\n</section>\n",
        esc(message)
      ));
    }
  }

  subscribe_section(&mut out, ctx.banner);

  out.push_str(
    "<footer>\n<p>Raw data: <a href=\"/events.json\">events.json</a></p>\n\
     </footer>\n",
  );
  out.push_str("</body>\n</html>\n");
  out
}

fn header(out: &mut String, ctx: &PageContext) {
  out.push_str("<header class=\"hero\">\n");
  out.push_str(&format!("<h1>{}</h1>\n", esc(ctx.title)));
  out.push_str(&motion::typewriter(ctx.tagline));
  out.push('\n');
  out.push_str("</header>\n");
}

fn stats_strip(out: &mut String, stats: &TimelineStats) {
  out.push_str("<section class=\"stats\">\n");
  stat_cell(out, &stats.total.to_string(), "milestones");
  if let Some(span) = stats.span_years() {
    stat_cell(out, &span.to_string(), "years covered");
  }
  stat_cell(
    out,
    &format!("{}%", stats.recent_share()),
    &format!("in the last {RECENT_WINDOW_YEARS} years"),
  );
  out.push_str("</section>\n");
}

fn stat_cell(out: &mut String, value: &str, label: &str) {
  out.push_str(&format!(
    "<div class=\"stat\"><span class=\"stat-value\">{}</span><span \
     class=\"stat-label\">{}</span></div>\n",
    esc(value),
    esc(label)
  ));
}

fn charts_section(out: &mut String, stats: &TimelineStats) {
  out.push_str("<section class=\"charts\">\n");
  for (svg, caption) in [
    (charts::decade_bars(stats), "Events per decade"),
    (charts::growth_line(stats), "Cumulative growth"),
    (motion::velocity_field(stats), "Recent velocity"),
  ] {
    out.push_str("<figure>\n");
    out.push_str(&svg);
    out.push_str(&format!("\n<figcaption>{caption}</figcaption>\n"));
    out.push_str("</figure>\n");
  }
  out.push_str("</section>\n");
}

fn filter_nav(out: &mut String, active: Filter) {
  out.push_str("<nav class=\"filters\" aria-label=\"Filter events\">\n");
  for (i, filter) in Filter::ALL.iter().enumerate() {
    let class = if *filter == active {
      "filter active"
    } else {
      "filter"
    };
    out.push_str(&format!(
      "<a class=\"{class}\" href=\"/?filter={}\" accesskey=\"{}\">{}</a>\n",
      filter.as_str(),
      i + 1,
      filter.label()
    ));
  }
  out.push_str("</nav>\n");
}

fn timeline(out: &mut String, events: &[Event], filter: Filter) {
  out.push_str("<section class=\"timeline\" id=\"timeline\">\n");
  let mut shown = 0usize;
  for event in events {
    if !filter.matches(event.importance) {
      continue;
    }
    shown += 1;
    let tag = event.importance.as_str();
    out.push_str(&format!("<article class=\"event {tag}\">\n"));
    out.push_str(&format!(
      "<div class=\"event-date\">{}</div>\n",
      esc(&event.date)
    ));
    out.push_str("<div class=\"event-body\">\n");
    out.push_str(&format!(
      "<h3 class=\"event-name\"><a href=\"{}\" target=\"_blank\" \
       rel=\"noopener noreferrer\">{}</a></h3>\n",
      esc(&event.link),
      esc(&event.name)
    ));
    out.push_str(&format!(
      "<p class=\"event-detail\">{}</p>\n",
      esc(&event.detail)
    ));
    out.push_str(&format!("<span class=\"event-tag\">{tag}</span>\n"));
    out.push_str("</div>\n</article>\n");
  }
  if shown == 0 {
    out.push_str("<p class=\"timeline-empty\">No events in this view.</p>\n");
  }
  out.push_str("</section>\n");
}

fn subscribe_section(out: &mut String, banner: Option<Banner>) {
  out.push_str("<section class=\"subscribe\" id=\"subscribe\">\n");
  out.push_str("<h2>Stay in the loop</h2>\n");
  out.push_str("<p>Get an email when a new milestone lands.</p>\n");
  if let Some(banner) = banner {
    out.push_str(&format!(
      "<div class=\"{}\" role=\"status\">{}</div>\n",
      banner.css_class(),
      banner.message()
    ));
  }
  out.push_str(
    "<form class=\"subscribe-form\" method=\"post\" action=\"/subscribe\">\n",
  );
  out.push_str(
    "<label class=\"visually-hidden\" for=\"email\">Email \
     address</label>\n",
  );
  out.push_str(
    "<input type=\"email\" id=\"email\" name=\"email\" \
     placeholder=\"you@example.com\" required>\n",
  );
  out.push_str("<button type=\"submit\">Notify me</button>\n");
  out.push_str("</form>\n</section>\n");
}

/// Escape text for both element content and attribute values.
fn esc(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      other => out.push(other),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use annal_core::event::Importance;

  use super::*;

  fn events() -> Vec<Event> {
    vec![
      Event {
        date:       "July 1956".to_string(),
        name:       "Dartmouth workshop".to_string(),
        detail:     "The founding workshop of the field.".to_string(),
        link:       "https://example.com/dartmouth".to_string(),
        importance: Importance::Pivotal,
      },
      Event {
        date:       "1972".to_string(),
        name:       "Prolog".to_string(),
        detail:     "Logic programming arrives.".to_string(),
        link:       "https://example.com/prolog".to_string(),
        importance: Importance::Major,
      },
      Event {
        date:       "2024".to_string(),
        name:       "Something recent".to_string(),
        detail:     "Close to the present.".to_string(),
        link:       "https://example.com/recent".to_string(),
        importance: Importance::Notable,
      },
    ]
  }

  fn page(filter: Filter, banner: Option<Banner>) -> String {
    let events = events();
    let stats = TimelineStats::compute(&events, 2026);
    render_page(&PageContext {
      title: "Annal",
      tagline: "A timeline.",
      filter,
      section: TimelineSection::Loaded {
        events: &events,
        stats:  &stats,
      },
      banner,
    })
  }

  #[test]
  fn full_page_renders_every_event() {
    let out = page(Filter::All, None);
    assert!(out.starts_with("<!DOCTYPE html>"), "got:\n{out}");
    assert!(out.contains("<title>Annal</title>"), "got:\n{out}");
    assert!(out.contains("class=\"event pivotal\""), "got:\n{out}");
    assert!(out.contains("class=\"event major\""), "got:\n{out}");
    assert!(out.contains("class=\"event notable\""), "got:\n{out}");
    assert!(out.contains("Dartmouth workshop"), "got:\n{out}");
    // Event links open in a new tab without leaking the referrer.
    assert!(
      out.contains("target=\"_blank\" rel=\"noopener noreferrer\""),
      "got:\n{out}"
    );
  }

  #[test]
  fn filter_shows_exactly_the_matching_events() {
    let out = page(Filter::Only(Importance::Major), None);
    assert!(out.contains("Prolog"), "got:\n{out}");
    assert!(!out.contains("Dartmouth workshop"), "got:\n{out}");
    assert!(!out.contains("Something recent"), "got:\n{out}");
    // The active filter is marked, the others are not.
    assert!(
      out.contains("class=\"filter active\" href=\"/?filter=major\""),
      "got:\n{out}"
    );
    assert!(
      out.contains("class=\"filter\" href=\"/?filter=all\""),
      "got:\n{out}"
    );
  }

  #[test]
  fn filters_carry_accesskeys_one_through_four() {
    let out = page(Filter::All, None);
    for (i, value) in ["all", "pivotal", "major", "notable"].iter().enumerate()
    {
      assert!(
        out.contains(&format!(
          "href=\"/?filter={value}\" accesskey=\"{}\"",
          i + 1
        )),
        "got:\n{out}"
      );
    }
  }

  #[test]
  fn stats_strip_shows_recent_share() {
    let out = page(Filter::All, None);
    // 1 of 3 events within the window.
    assert!(out.contains(">33%</span>"), "got:\n{out}");
    assert!(out.contains(">3</span>"), "got:\n{out}");
    assert!(out.contains(">70</span>"), "got:\n{out}");
  }

  #[test]
  fn event_text_is_escaped() {
    let events = vec![Event {
      date:       "2001".to_string(),
      name:       "<script>alert(1)</script>".to_string(),
      detail:     "Tom & Jerry".to_string(),
      link:       "https://example.com/?a=1&b=\"2\"".to_string(),
      importance: Importance::Notable,
    }];
    let stats = TimelineStats::compute(&events, 2026);
    let out = render_page(&PageContext {
      title:   "Annal",
      tagline: "t",
      filter:  Filter::All,
      section: TimelineSection::Loaded {
        events: &events,
        stats:  &stats,
      },
      banner:  None,
    });
    assert!(!out.contains("<script>"), "got:\n{out}");
    assert!(out.contains("&lt;script&gt;"), "got:\n{out}");
    assert!(out.contains("Tom &amp; Jerry"), "got:\n{out}");
    assert!(out.contains("a=1&amp;b=&quot;2&quot;"), "got:\n{out}");
  }

  #[test]
  fn unavailable_timeline_shows_message_and_no_charts() {
    let out = render_page(&PageContext {
      title:   "Annal",
      tagline: "t",
      filter:  Filter::All,
      section: TimelineSection::Unavailable {
        message: "Unable to load events. Please check your internet \
                  connection and try again.",
      },
      banner:  None,
    });
    assert!(out.contains("class=\"load-error\""), "got:\n{out}");
    assert!(out.contains("Unable to load events."), "got:\n{out}");
    assert!(!out.contains("class=\"charts\""), "got:\n{out}");
    assert!(!out.contains("class=\"stats\""), "got:\n{out}");
  }

  #[test]
  fn banner_messages_surface_after_form_posts() {
    let out = page(Filter::All, Some(Banner::Subscribed));
    assert!(out.contains("notice-success"), "got:\n{out}");
    assert!(out.contains("Successfully subscribed!"), "got:\n{out}");

    let out = page(Filter::All, Some(Banner::AlreadySubscribed));
    assert!(out.contains("You're already subscribed!"), "got:\n{out}");

    let out = page(Filter::All, Some(Banner::Failed));
    assert!(out.contains("notice-error"), "got:\n{out}");
  }

  #[test]
  fn empty_filter_result_says_so() {
    let events = vec![events()[0].clone()];
    let stats = TimelineStats::compute(&events, 2026);
    let out = render_page(&PageContext {
      title:   "Annal",
      tagline: "t",
      filter:  Filter::Only(Importance::Notable),
      section: TimelineSection::Loaded {
        events: &events,
        stats:  &stats,
      },
      banner:  None,
    });
    assert!(out.contains("No events in this view."), "got:\n{out}");
  }

  #[test]
  fn form_posts_to_the_no_script_endpoint() {
    let out = page(Filter::All, None);
    assert!(
      out.contains("method=\"post\" action=\"/subscribe\""),
      "got:\n{out}"
    );
  }
}
