//! Error boundary component.

use std::sync::Arc;

use crate::component::{Component, Render, Resolution};
use crate::context::Context;
use crate::error::RenderError;
use crate::renderer::RendererScope;

type AcceptFn = Arc<dyn Fn(&RenderError) -> bool + Send + Sync>;

/// Catches failures raised anywhere in its subtree and substitutes fallback
/// content.
///
/// The subtree is rendered through a nested render in the boundary's own
/// enclosing context. When that fails with an accepted error, the fallback is
/// rendered in the same enclosing context, not in whatever extended
/// context the failed subtree had built up, and the result is inserted
/// pre-escaped, so already-rendered markup is not escaped a second time.
/// Failures that no registered predicate accepts propagate to the boundary's
/// caller unchanged. An empty accepted set accepts every failure.
#[derive(Clone)]
pub struct ErrorBoundary {
  children: Vec<Component>,
  fallback: Component,
  accepts: Vec<AcceptFn>,
}

impl ErrorBoundary {
  pub fn new(children: impl IntoIterator<Item = Component>) -> Self {
    Self {
      children: children.into_iter().collect(),
      fallback: Component::Nothing,
      accepts: Vec::new(),
    }
  }

  pub fn child(mut self, child: impl Into<Component>) -> Self {
    self.children.push(child.into());
    self
  }

  /// Sets the fallback component. Defaults to nothing.
  pub fn fallback(mut self, fallback: impl Into<Component>) -> Self {
    self.fallback = fallback.into();
    self
  }

  /// Accepts failures of type `E` (anywhere in the error's source chain).
  pub fn catch<E>(mut self) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    self.accepts.push(Arc::new(|err| err.is::<E>()));
    self
  }
}

impl Render for ErrorBoundary {
  fn resolve(&self, ctx: &Context) -> Resolution {
    let children = self.children.clone();
    let fallback = self.fallback.clone();
    let accepts = self.accepts.clone();
    let ctx = ctx.clone();

    Resolution::pending(async move {
      let scope = ctx.require::<RendererScope>()?.clone();
      match scope.render(Component::List(children), ctx.clone()).await {
        Ok(rendered) => Ok(Component::Raw(rendered)),
        Err(err) => {
          let accepted = accepts.is_empty() || accepts.iter().any(|accept| accept(&err));
          if !accepted {
            return Err(err);
          }
          let rendered = scope.render(fallback, ctx).await?;
          Ok(Component::Raw(rendered))
        }
      }
    })
  }
}

impl From<ErrorBoundary> for Component {
  fn from(boundary: ErrorBoundary) -> Self {
    Component::node(boundary)
  }
}
