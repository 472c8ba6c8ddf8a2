//! `annal` — check, summarise, and statically export an events document
//! without running the server.
//!
//! # Usage
//!
//! ```
//! annal check events.json
//! annal stats events.json
//! annal export events.json --out dist/
//! ```

use std::path::{Path, PathBuf};

use annal_core::{
  event::{Filter, Timeline},
  stats::{RECENT_WINDOW_YEARS, TimelineStats},
};
use annal_render::{PageContext, TimelineSection, render_page};
use anyhow::Context as _;
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "annal", version)]
struct Cli {
  #[command(subcommand)]
  cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Validate an events document and report per-event issues.
  Check(CheckArgs),
  /// Print summary statistics for an events document.
  Stats(StatsArgs),
  /// Render the timeline as a static site.
  Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
  /// Events document to validate.
  events: PathBuf,
}

#[derive(Parser, Debug)]
struct StatsArgs {
  /// Events document to summarise.
  events: PathBuf,
}

#[derive(Parser, Debug)]
struct ExportArgs {
  /// Events document to render.
  events: PathBuf,

  /// Output directory; receives index.html, static/style.css and a copy
  /// of the events document.
  #[arg(long)]
  out: PathBuf,

  /// Page title.
  #[arg(long, default_value = "Annal")]
  title: String,

  /// Tagline typed out under the title.
  #[arg(long, default_value = "Tracking the march of machine intelligence")]
  tagline: String,
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  match cli.cmd {
    Command::Check(args) => cmd_check(args),
    Command::Stats(args) => cmd_stats(args),
    Command::Export(args) => cmd_export(args),
  }
}

fn load(path: &Path) -> anyhow::Result<Timeline> {
  let bytes =
    std::fs::read(path).with_context(|| format!("read '{}'", path.display()))?;
  Timeline::from_slice(&bytes)
    .with_context(|| format!("parse '{}'", path.display()))
}

// ─── check ────────────────────────────────────────────────────────────────────

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
  let timeline = load(&args.events)?;
  let issues = timeline.lint();

  for issue in &issues {
    println!("event {} ({}): {}", issue.index, issue.field, issue.message);
  }

  if issues.is_empty() {
    println!("{} events, no issues", timeline.events.len());
    Ok(())
  } else {
    anyhow::bail!(
      "{} issue(s) across {} events",
      issues.len(),
      timeline.events.len()
    );
  }
}

// ─── stats ────────────────────────────────────────────────────────────────────

fn cmd_stats(args: StatsArgs) -> anyhow::Result<()> {
  let timeline = load(&args.events)?;
  let stats = TimelineStats::compute(&timeline.events, Utc::now().year());
  print!("{}", stats_report(&stats));
  Ok(())
}

fn stats_report(stats: &TimelineStats) -> String {
  let mut out = String::new();

  out.push_str(&format!("events        {}\n", stats.total));
  out.push_str(&format!(
    "importance    {} pivotal / {} major / {} notable\n",
    stats.tally.pivotal, stats.tally.major, stats.tally.notable
  ));
  if let Some(span) = stats.span_years() {
    out.push_str(&format!("span          {span} years\n"));
  }
  out.push_str(&format!(
    "last {} years  {}% of all events\n",
    RECENT_WINDOW_YEARS,
    stats.recent_share()
  ));

  if !stats.decades.is_empty() {
    out.push('\n');
    for bucket in &stats.decades {
      out.push_str(&format!(
        "{}s {:>4}  {}\n",
        bucket.start_year,
        bucket.count,
        "#".repeat(bucket.count)
      ));
    }
  }
  out
}

// ─── export ───────────────────────────────────────────────────────────────────

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
  let timeline = load(&args.events)?;
  let stats = TimelineStats::compute(&timeline.events, Utc::now().year());

  let page = render_page(&PageContext {
    title:   &args.title,
    tagline: &args.tagline,
    filter:  Filter::All,
    section: TimelineSection::Loaded {
      events: &timeline.events,
      stats:  &stats,
    },
    banner:  None,
  });

  let static_dir = args.out.join("static");
  std::fs::create_dir_all(&static_dir)
    .with_context(|| format!("create '{}'", static_dir.display()))?;

  std::fs::write(args.out.join("index.html"), page)
    .context("write index.html")?;
  std::fs::write(static_dir.join("style.css"), annal_render::STYLESHEET)
    .context("write style.css")?;
  std::fs::copy(&args.events, args.out.join("events.json"))
    .context("copy events.json")?;

  eprintln!("wrote {}", args.out.display());
  Ok(())
}

#[cfg(test)]
mod tests {
  use annal_core::event::Event;

  use super::*;

  #[test]
  fn stats_report_includes_histogram_rows() {
    let events: Vec<Event> = serde_json::from_str(
      r#"[
        {"date": "1956", "name": "a", "detail": "d", "link": "l",
         "importance": "pivotal"},
        {"date": "1959", "name": "b", "detail": "d", "link": "l",
         "importance": "major"},
        {"date": "1972", "name": "c", "detail": "d", "link": "l",
         "importance": "notable"}
      ]"#,
    )
    .unwrap();
    let stats = TimelineStats::compute(&events, 2026);
    let report = stats_report(&stats);

    assert!(report.contains("events        3"), "got:\n{report}");
    assert!(report.contains("1 pivotal / 1 major / 1 notable"));
    assert!(report.contains("span          70 years"));
    assert!(report.contains("1950s    2  ##"), "got:\n{report}");
    assert!(report.contains("1960s    0  \n"), "got:\n{report}");
    assert!(report.contains("1970s    1  #"), "got:\n{report}");
  }
}
