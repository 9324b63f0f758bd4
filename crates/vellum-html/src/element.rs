//! The generic tag component.

use vellum_render::{Component, Context, Render, Resolution};

use crate::attr::{AttrValue, Formatter};

/// An XML/HTML element.
///
/// Elements are always synchronous. If a tag's content must be computed
/// asynchronously, resolve it in an async parent component and pass the
/// finished value in; the tag itself only assembles markup.
#[derive(Clone)]
pub struct Element {
  name: String,
  attrs: Vec<(String, AttrValue)>,
  children: Vec<Component>,
  separator: Option<Component>,
  void: bool,
}

impl Element {
  /// A normal element with children, separated by newlines by default.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      attrs: Vec::new(),
      children: Vec::new(),
      separator: Some(Component::from("\n")),
      void: false,
    }
  }

  /// A void element (`<img .../>`): attributes only, no children.
  pub fn void(name: impl Into<String>) -> Self {
    Self {
      void: true,
      ..Self::new(name)
    }
  }

  pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
    self.attrs.push((name.into(), value.into()));
    self
  }

  pub fn child(mut self, child: impl Into<Component>) -> Self {
    self.children.push(child.into());
    self
  }

  pub fn children(mut self, children: impl IntoIterator<Item = Component>) -> Self {
    self.children.extend(children);
    self
  }

  /// Replaces the child separator.
  pub fn separator(mut self, separator: impl Into<Component>) -> Self {
    self.separator = Some(separator.into());
    self
  }

  /// Renders children back to back, with no separator.
  pub fn inline(mut self) -> Self {
    self.separator = None;
    self
  }

  fn format_attrs(&self, ctx: &Context) -> String {
    let default = Formatter::default();
    let formatter = ctx.get::<Formatter>().unwrap_or(&default);
    let mut out = String::new();
    for (name, value) in &self.attrs {
      if let Some(pair) = formatter.format(name, value) {
        if !out.is_empty() {
          out.push(' ');
        }
        out.push_str(&pair);
      }
    }
    out
  }
}

impl Render for Element {
  fn resolve(&self, ctx: &Context) -> Resolution {
    let props = self.format_attrs(ctx);
    if self.void {
      let markup = if props.is_empty() {
        format!("<{}/>", self.name)
      } else {
        format!("<{} {}/>", self.name, props)
      };
      return Resolution::ready(Component::Raw(markup));
    }

    let opening = if props.is_empty() {
      format!("<{}>", self.name)
    } else {
      format!("<{} {}>", self.name, props)
    };

    let mut parts = Vec::with_capacity(self.children.len() + 2);
    parts.push(Component::Raw(opening));
    match &self.separator {
      None => parts.extend(self.children.iter().cloned()),
      // Separators pad both ends, so children sit on their own lines between
      // the tags.
      Some(separator) if !self.children.is_empty() => {
        parts.push(separator.clone());
        for (i, child) in self.children.iter().enumerate() {
          if i > 0 {
            parts.push(separator.clone());
          }
          parts.push(child.clone());
        }
        parts.push(separator.clone());
      }
      Some(_) => {}
    }
    parts.push(Component::Raw(format!("</{}>", self.name)));
    Resolution::ready(Component::List(parts))
  }
}

impl From<Element> for Component {
  fn from(element: Element) -> Self {
    Component::node(element)
  }
}
