//! Regex-driven slot substitution for snippet text.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use vellum_render::Component;

use crate::error::SnippetError;

static DEFAULT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  // A valid literal, so compilation cannot fail.
  Regex::new(r"<!-- *slot *\[ *([^\[ ]+) *\] *-->").expect("default slot pattern")
});

/// Replaces slot placeholders in snippet text with components.
///
/// The default placeholder is an HTML comment of the form
/// `<!-- slot[key] -->` (whitespace around the key and the brackets is
/// tolerated). A custom pattern can be supplied as long as it has a
/// single capture group for the slot key.
#[derive(Clone)]
pub struct Slots {
  mapping: HashMap<String, Component>,
  pattern: Regex,
  not_found: Option<Component>,
}

impl Slots {
  pub fn new() -> Self {
    Slots {
      mapping: HashMap::new(),
      pattern: DEFAULT_PATTERN.clone(),
      not_found: None,
    }
  }

  /// Maps a slot key to the component that replaces it.
  pub fn slot(mut self, key: impl Into<String>, component: impl Into<Component>) -> Self {
    self.mapping.insert(key.into(), component.into());
    self
  }

  /// Overrides the placeholder pattern. The pattern must capture the
  /// slot key in its first capture group.
  pub fn pattern(mut self, pattern: Regex) -> Self {
    self.pattern = pattern;
    self
  }

  /// Fallback component for slot keys missing from the mapping.
  /// Without one, an unmapped key fails the resolution.
  pub fn not_found(mut self, component: impl Into<Component>) -> Self {
    self.not_found = Some(component.into());
    self
  }

  /// Splits `text` on slot placeholders, substituting each placeholder
  /// with its mapped component. Plain text parts are kept as-is and
  /// are not escaped again when rendered.
  pub fn resolve_text(&self, text: &str) -> Result<Vec<Component>, SnippetError> {
    let mut parts = Vec::new();
    let mut last = 0;

    for caps in self.pattern.captures_iter(text) {
      let whole = match caps.get(0) {
        Some(m) => m,
        None => continue,
      };
      let key = match caps.get(1) {
        Some(m) => m.as_str(),
        None => continue,
      };
      if whole.start() > last {
        parts.push(Component::Raw(text[last..whole.start()].to_string()));
      }
      match self.mapping.get(key) {
        Some(component) => parts.push(component.clone()),
        None => match &self.not_found {
          Some(fallback) => parts.push(fallback.clone()),
          None => {
            return Err(SnippetError::SlotNotFound {
              key: key.to_string(),
            });
          }
        },
      }
      last = whole.end();
    }

    if last < text.len() {
      parts.push(Component::Raw(text[last..].to_string()));
    }
    Ok(parts)
  }
}

impl Default for Slots {
  fn default() -> Self {
    Slots::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn text_of(component: &Component) -> &str {
    match component {
      Component::Raw(text) | Component::Text(text) => text,
      other => panic!("expected a text part, got {other:?}"),
    }
  }

  #[test]
  fn splits_text_around_placeholders() {
    let slots = Slots::new().slot("name", "World");
    let parts = slots.resolve_text("Hello <!-- slot[name] -->!").unwrap();

    assert_eq!(parts.len(), 3);
    assert_eq!(text_of(&parts[0]), "Hello ");
    assert_eq!(text_of(&parts[1]), "World");
    assert_eq!(text_of(&parts[2]), "!");
  }

  #[test]
  fn placeholder_whitespace_is_tolerated() {
    let slots = Slots::new().slot("key", "v");
    for text in [
      "<!-- slot[key] -->",
      "<!--slot[key]-->",
      "<!--  slot  [  key  ]  -->",
    ] {
      let parts = slots.resolve_text(text).unwrap();
      assert_eq!(parts.len(), 1, "pattern should match {text:?}");
      assert_eq!(text_of(&parts[0]), "v");
    }
  }

  #[test]
  fn unmapped_key_is_an_error() {
    let slots = Slots::new();
    let err = slots.resolve_text("<!-- slot[missing] -->").unwrap_err();
    assert!(matches!(err, SnippetError::SlotNotFound { key } if key == "missing"));
  }

  #[test]
  fn not_found_component_stands_in_for_unmapped_keys() {
    let slots = Slots::new().not_found("?");
    let parts = slots.resolve_text("<!-- slot[missing] -->").unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(text_of(&parts[0]), "?");
  }
}
