//! Built-in utility components.

use crate::component::{Component, ContextStep, Render, Resolution};
use crate::context::{Context, Layer};

/// Wraps a list of children without adding any markup of its own.
#[derive(Clone, Default)]
pub struct Fragment {
  children: Vec<Component>,
}

impl Fragment {
  pub fn new(children: impl IntoIterator<Item = Component>) -> Self {
    Self {
      children: children.into_iter().collect(),
    }
  }

  pub fn child(mut self, child: impl Into<Component>) -> Self {
    self.children.push(child.into());
    self
  }
}

impl Render for Fragment {
  fn resolve(&self, _ctx: &Context) -> Resolution {
    Resolution::ready(Component::List(self.children.clone()))
  }
}

impl From<Fragment> for Component {
  fn from(fragment: Fragment) -> Self {
    Component::node(fragment)
  }
}

/// A static context provider: wraps children and makes one extra layer
/// visible to them (and only to them).
#[derive(Clone)]
pub struct WithContext {
  children: Vec<Component>,
  layer: Layer,
}

impl WithContext {
  pub fn new(layer: Layer, children: impl IntoIterator<Item = Component>) -> Self {
    Self {
      children: children.into_iter().collect(),
      layer,
    }
  }

  pub fn child(mut self, child: impl Into<Component>) -> Self {
    self.children.push(child.into());
    self
  }
}

impl Render for WithContext {
  fn resolve(&self, _ctx: &Context) -> Resolution {
    Resolution::ready(Component::List(self.children.clone()))
  }

  fn extend_context(&self) -> Option<ContextStep> {
    Some(ContextStep::Ready(self.layer.clone()))
  }
}

impl From<WithContext> for Component {
  fn from(with_context: WithContext) -> Self {
    Component::node(with_context)
  }
}
