//! The component model.

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::context::{Context, Layer};
use crate::error::RenderError;

/// The result of resolving a component one level.
pub type RenderResult = Result<Component, RenderError>;

/// A node in a component tree.
///
/// The engine dispatches on the variant in a fixed order: text, nothing,
/// sequence, resolvable node. Unrecognized shapes cannot exist; the enum is
/// closed.
#[derive(Clone)]
pub enum Component {
  /// Plain text, escaped through the configured string formatter.
  Text(String),
  /// Pre-escaped text, passed through byte-for-byte.
  ///
  /// Only construct this immediately before handing the value to the engine;
  /// any intermediate string manipulation should happen on ordinary strings
  /// so it cannot smuggle unescaped data past the formatter.
  Raw(String),
  /// Renders to nothing while keeping sibling order intact.
  Nothing,
  /// An ordered sequence, flattened recursively during rendering.
  List(Vec<Component>),
  /// A resolvable node.
  Node(Arc<dyn Render>),
}

impl Component {
  /// Creates a pre-escaped text component.
  pub fn raw(text: impl Into<String>) -> Self {
    Component::Raw(text.into())
  }

  /// Wraps a [`Render`] implementation.
  pub fn node(node: impl Render) -> Self {
    Component::Node(Arc::new(node))
  }

  /// Creates a component from a synchronous closure.
  pub fn from_fn<F>(f: F) -> Self
  where
    F: Fn(&Context) -> RenderResult + Send + Sync + 'static,
  {
    Component::Node(Arc::new(FnComponent(f)))
  }

  /// Creates a component from an asynchronous closure.
  pub fn from_async_fn<F, Fut>(f: F) -> Self
  where
    F: Fn(Context) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = RenderResult> + Send + 'static,
  {
    let f = move |ctx: Context| -> BoxFuture<'static, RenderResult> { Box::pin(f(ctx)) };
    Component::Node(Arc::new(AsyncFnComponent(f)))
  }
}

impl fmt::Debug for Component {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Component::Text(text) => f.debug_tuple("Text").field(text).finish(),
      Component::Raw(text) => f.debug_tuple("Raw").field(text).finish(),
      Component::Nothing => f.write_str("Nothing"),
      Component::List(items) => f.debug_tuple("List").field(items).finish(),
      Component::Node(_) => f.write_str("Node(..)"),
    }
  }
}

impl From<&str> for Component {
  fn from(text: &str) -> Self {
    Component::Text(text.to_string())
  }
}

impl From<String> for Component {
  fn from(text: String) -> Self {
    Component::Text(text)
  }
}

impl From<Vec<Component>> for Component {
  fn from(items: Vec<Component>) -> Self {
    Component::List(items)
  }
}

impl FromIterator<Component> for Component {
  fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
    Component::List(iter.into_iter().collect())
  }
}

/// The outcome of calling [`Render::resolve`].
///
/// Whether a resolution suspends is an explicit property of the value, not of
/// the function: synchronous components return [`Resolution::Ready`], and the
/// engine processes them without paying any suspension overhead, while
/// [`Resolution::Pending`] futures are gathered into concurrent batches.
pub enum Resolution {
  Ready(RenderResult),
  Pending(BoxFuture<'static, RenderResult>),
}

impl Resolution {
  /// A successful, non-suspending resolution.
  pub fn ready(component: impl Into<Component>) -> Self {
    Resolution::Ready(Ok(component.into()))
  }

  /// A suspending resolution.
  pub fn pending<F>(fut: F) -> Self
  where
    F: Future<Output = RenderResult> + Send + 'static,
  {
    Resolution::Pending(Box::pin(fut))
  }
}

/// The outcome of computing a context extension.
pub enum ContextStep {
  Ready(Layer),
  Pending(BoxFuture<'static, Result<Layer, RenderError>>),
}

/// A resolvable tree node.
///
/// `resolve` is called at most once per render pass, with the context chain
/// visible at the node's position. The result may be any component shape,
/// including further resolvable nodes; resolution is repeated until only text
/// remains.
pub trait Render: Send + Sync + 'static {
  /// Resolves the component one level.
  fn resolve(&self, ctx: &Context) -> Resolution;

  /// Returns the context extension for this node's subtree, if any.
  ///
  /// A `Some` return marks the node as a context provider: the returned layer
  /// is pushed onto the chain for the node's own resolution and everything
  /// discovered from its result, but never for its siblings.
  fn extend_context(&self) -> Option<ContextStep> {
    None
  }
}

struct FnComponent<F>(F);

impl<F> Render for FnComponent<F>
where
  F: Fn(&Context) -> RenderResult + Send + Sync + 'static,
{
  fn resolve(&self, ctx: &Context) -> Resolution {
    Resolution::Ready((self.0)(ctx))
  }
}

struct AsyncFnComponent<F>(F);

impl<F> Render for AsyncFnComponent<F>
where
  F: Fn(Context) -> BoxFuture<'static, RenderResult> + Send + Sync + 'static,
{
  fn resolve(&self, ctx: &Context) -> Resolution {
    Resolution::Pending((self.0)(ctx.clone()))
  }
}
