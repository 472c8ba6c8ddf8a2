//! A thin builder over `quick_xml::Writer` for inline SVG fragments.
//!
//! Writes target an in-memory buffer and cannot fail, hence the unwraps.

use std::io::Cursor;

use quick_xml::{
  Writer,
  events::{BytesEnd, BytesStart, BytesText, Event},
};

pub(crate) struct SvgBuilder {
  writer: Writer<Cursor<Vec<u8>>>,
}

impl SvgBuilder {
  /// Open an `<svg>` root with a `viewBox` of the given size and an
  /// accessible `<title>`.
  pub(crate) fn new(class: &str, width: u32, height: u32, title: &str) -> Self {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    let mut root = BytesStart::new("svg");
    root.push_attribute(("xmlns", "http://www.w3.org/2000/svg"));
    root.push_attribute(("class", class));
    root.push_attribute(("viewBox", format!("0 0 {width} {height}").as_str()));
    root.push_attribute(("role", "img"));
    writer.write_event(Event::Start(root)).unwrap();

    let mut builder = Self { writer };
    builder.text_el("title", &[], title);
    builder
  }

  pub(crate) fn start(&mut self, tag: &str, attrs: &[(&str, &str)]) {
    let mut el = BytesStart::new(tag);
    for (k, v) in attrs {
      el.push_attribute((*k, *v));
    }
    self.writer.write_event(Event::Start(el)).unwrap();
  }

  pub(crate) fn end(&mut self, tag: &str) {
    self.writer.write_event(Event::End(BytesEnd::new(tag))).unwrap();
  }

  pub(crate) fn empty(&mut self, tag: &str, attrs: &[(&str, &str)]) {
    let mut el = BytesStart::new(tag);
    for (k, v) in attrs {
      el.push_attribute((*k, *v));
    }
    self.writer.write_event(Event::Empty(el)).unwrap();
  }

  pub(crate) fn text_el(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) {
    self.start(tag, attrs);
    self.writer.write_event(Event::Text(BytesText::new(text))).unwrap();
    self.end(tag);
  }

  pub(crate) fn finish(mut self) -> String {
    self.writer.write_event(Event::End(BytesEnd::new("svg"))).unwrap();
    let bytes = self.writer.into_inner().into_inner();
    // Only `&str` data was ever written.
    String::from_utf8(bytes).unwrap()
  }
}

/// Format a coordinate with up to two decimals, trimming trailing zeroes,
/// so output stays stable across platforms.
pub(crate) fn coord(value: f64) -> String {
  let s = format!("{value:.2}");
  let s = s.trim_end_matches('0').trim_end_matches('.');
  if s == "-0" { "0".to_string() } else { s.to_string() }
}
