//! Server-side rendering for the Annal timeline.
//!
//! Everything the browser sees is produced here: the HTML page itself and
//! the inline SVG charts. Animation is expressed with SVG/SMIL attributes,
//! so the page works with no client-side scripting at all. All output is a
//! pure function of the inputs; nothing here reads clocks or randomness.

pub mod charts;
pub mod motion;
pub mod page;
mod svg;

pub use page::{Banner, PageContext, TimelineSection, render_page};

/// The stylesheet matching the class names emitted by [`render_page`] and
/// the chart builders. Served by the site at `/static/style.css` and copied
/// into static exports.
pub const STYLESHEET: &str = include_str!("../assets/style.css");
