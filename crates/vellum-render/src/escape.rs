//! Text escaping.

use std::sync::Arc;

/// Formats a plain text fragment for output.
///
/// The renderer applies the configured formatter exactly once to every
/// [`Component::Text`](crate::Component::Text) fragment. Pre-escaped
/// ([`Component::Raw`](crate::Component::Raw)) fragments bypass it.
pub type StringFormatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Escapes the three XML-significant characters (`&`, `<`, `>`).
///
/// This is the default string formatter.
pub fn xml_escape(value: &str) -> String {
  let mut out = String::with_capacity(value.len());
  for c in value.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      _ => out.push(c),
    }
  }
  out
}

pub(crate) fn default_formatter() -> StringFormatter {
  Arc::new(|value| xml_escape(value))
}
