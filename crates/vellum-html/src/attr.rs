//! Attribute values and their formatting.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use vellum_render::{Component, ContextKey, Layer, WithContext, xml_escape};

/// Marker for boolean XML/HTML attributes.
///
/// `True` renders the attribute with an empty value (`checked=""`), `False`
/// skips the attribute entirely. See
/// <https://developer.mozilla.org/en-US/docs/Web/HTML/Attributes#boolean_attributes>.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XBool {
  True,
  False,
}

impl From<bool> for XBool {
  fn from(value: bool) -> Self {
    if value { XBool::True } else { XBool::False }
  }
}

/// An attribute value.
///
/// The set of shapes is closed; custom rendering of a shape is done by
/// replacing the value formatter on [`Formatter`], not by registering new
/// types.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
  Text(String),
  Int(i64),
  Float(f64),
  Bool(bool),
  Flag(XBool),
  Date(NaiveDate),
  DateTime(DateTime<FixedOffset>),
}

impl From<&str> for AttrValue {
  fn from(value: &str) -> Self {
    AttrValue::Text(value.to_string())
  }
}

impl From<String> for AttrValue {
  fn from(value: String) -> Self {
    AttrValue::Text(value)
  }
}

impl From<i64> for AttrValue {
  fn from(value: i64) -> Self {
    AttrValue::Int(value)
  }
}

impl From<i32> for AttrValue {
  fn from(value: i32) -> Self {
    AttrValue::Int(value as i64)
  }
}

impl From<u32> for AttrValue {
  fn from(value: u32) -> Self {
    AttrValue::Int(value as i64)
  }
}

impl From<f64> for AttrValue {
  fn from(value: f64) -> Self {
    AttrValue::Float(value)
  }
}

impl From<bool> for AttrValue {
  fn from(value: bool) -> Self {
    AttrValue::Bool(value)
  }
}

impl From<XBool> for AttrValue {
  fn from(value: XBool) -> Self {
    AttrValue::Flag(value)
  }
}

impl From<NaiveDate> for AttrValue {
  fn from(value: NaiveDate) -> Self {
    AttrValue::Date(value)
  }
}

impl From<DateTime<FixedOffset>> for AttrValue {
  fn from(value: DateTime<FixedOffset>) -> Self {
    AttrValue::DateTime(value)
  }
}

impl From<DateTime<Utc>> for AttrValue {
  fn from(value: DateTime<Utc>) -> Self {
    AttrValue::DateTime(value.fixed_offset())
  }
}

/// Quotes an attribute value XML-style.
///
/// Escapes markup-significant characters, prefers double quotes, and falls
/// back to single quotes (or `&quot;` escaping) when the value itself
/// contains quote characters.
pub fn quote_attr(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());
  for c in xml_escape(value).chars() {
    match c {
      '\n' => escaped.push_str("&#10;"),
      '\r' => escaped.push_str("&#13;"),
      '\t' => escaped.push_str("&#9;"),
      _ => escaped.push(c),
    }
  }

  if !escaped.contains('"') {
    format!("\"{escaped}\"")
  } else if !escaped.contains('\'') {
    format!("'{escaped}'")
  } else {
    format!("\"{}\"", escaped.replace('"', "&quot;"))
  }
}

type NameFormatter = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;
type ValueFormatter = Arc<dyn Fn(&AttrValue) -> Option<String> + Send + Sync>;

/// Attribute name and value formatter.
///
/// Registered in the rendering context under its own key, so a subtree can
/// swap in a customized formatter without affecting its siblings. A `None`
/// from either the name or the value formatter skips the whole attribute.
#[derive(Clone)]
pub struct Formatter {
  name_formatter: NameFormatter,
  value_formatter: ValueFormatter,
}

impl Default for Formatter {
  fn default() -> Self {
    Self::new()
  }
}

impl Formatter {
  pub fn new() -> Self {
    Self {
      name_formatter: Arc::new(|name| Self::default_name(name)),
      value_formatter: Arc::new(Self::default_value),
    }
  }

  /// Replaces the name formatter.
  pub fn name_formatter(
    mut self,
    f: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
  ) -> Self {
    self.name_formatter = Arc::new(f);
    self
  }

  /// Replaces the value formatter. The default is available as
  /// [`Formatter::default_value`] for delegation.
  pub fn value_formatter(
    mut self,
    f: impl Fn(&AttrValue) -> Option<String> + Send + Sync + 'static,
  ) -> Self {
    self.value_formatter = Arc::new(f);
    self
  }

  /// Formats one name-value pair as `name="value"`, or `None` if the
  /// attribute should be skipped.
  pub fn format(&self, name: &str, value: &AttrValue) -> Option<String> {
    let name = (self.name_formatter)(name)?;
    let value = (self.value_formatter)(value)?;
    Some(format!("{}={}", name, quote_attr(&value)))
  }

  pub fn format_name(&self, name: &str) -> Option<String> {
    (self.name_formatter)(name)
  }

  pub fn format_value(&self, value: &AttrValue) -> Option<String> {
    (self.value_formatter)(value)
  }

  /// Default name rule: a leading or trailing underscore marks a literal
  /// name (underscores stripped, no replacement); otherwise underscores
  /// become hyphens. Keeps Rust-identifier-friendly attribute names usable
  /// (`data_id` -> `data-id`, `_class` -> `class`).
  pub fn default_name(name: &str) -> Option<String> {
    let first = name.chars().next()?;
    let last = name.chars().next_back()?;
    if first == '_' || last == '_' {
      Some(name.trim_matches('_').to_string())
    } else {
      Some(name.replace('_', "-"))
    }
  }

  /// Default value rule per [`AttrValue`] shape.
  pub fn default_value(value: &AttrValue) -> Option<String> {
    match value {
      AttrValue::Text(text) => Some(text.clone()),
      AttrValue::Int(i) => Some(i.to_string()),
      AttrValue::Float(f) => Some(f.to_string()),
      AttrValue::Bool(b) => Some(if *b { "true" } else { "false" }.to_string()),
      AttrValue::Flag(XBool::True) => Some(String::new()),
      AttrValue::Flag(XBool::False) => None,
      AttrValue::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
      AttrValue::DateTime(dt) => Some(dt.to_rfc3339()),
    }
  }

  /// Wraps children in a context provider carrying this formatter.
  pub fn in_context(self, children: impl IntoIterator<Item = Component>) -> WithContext {
    WithContext::new(Layer::new().with::<Formatter>(self), children)
  }
}

impl ContextKey for Formatter {
  type Value = Formatter;
}
