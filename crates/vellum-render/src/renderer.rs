//! The render entry point.

use futures::future::{BoxFuture, join_all};

use crate::component::Component;
use crate::context::{Context, ContextKey, Layer};
use crate::error::RenderError;
use crate::escape::{StringFormatter, default_formatter};
use crate::tree::TreeRenderer;

/// Renders component trees to strings.
///
/// A renderer carries a default context layer chain and a string formatter;
/// both are fixed at construction. Rendering is a fresh, one-shot full tree
/// evaluation every time; no state survives between calls.
#[derive(Clone)]
pub struct Renderer {
  default_context: Context,
  formatter: StringFormatter,
}

impl Default for Renderer {
  fn default() -> Self {
    Self::new()
  }
}

impl Renderer {
  pub fn new() -> Self {
    Self {
      default_context: Context::new(),
      formatter: default_formatter(),
    }
  }

  /// Pushes a layer onto the renderer's default context.
  pub fn default_layer(mut self, layer: Layer) -> Self {
    self.default_context = self.default_context.push(layer);
    self
  }

  /// Replaces the default XML escaper with a custom string formatter.
  pub fn string_formatter(mut self, formatter: StringFormatter) -> Self {
    self.formatter = formatter;
    self
  }

  /// Renders the given component with the default context.
  pub async fn render(&self, component: impl Into<Component>) -> Result<String, RenderError> {
    render_component(component.into(), self.base_context(), self.formatter.clone()).await
  }

  /// Renders the given component with an extra context layer pushed over the
  /// default context.
  pub async fn render_with(
    &self,
    component: impl Into<Component>,
    layer: Layer,
  ) -> Result<String, RenderError> {
    let ctx = self.base_context().push(layer);
    render_component(component.into(), ctx, self.formatter.clone()).await
  }

  /// Builds the per-call root context.
  ///
  /// The scope handle goes into a per-call layer rather than into
  /// `default_context`, so the renderer's own configuration never captures a
  /// scope of itself.
  fn base_context(&self) -> Context {
    let scope = Layer::new().with::<RendererScope>(ScopedRenderer::new(self.formatter.clone()));
    self.default_context.push(scope)
  }
}

/// Context key under which the engine registers a [`ScopedRenderer`] for
/// every render call.
///
/// Components that need to run a nested render (error boundaries most
/// notably) fetch the scoped renderer from their context instead of holding
/// a renderer reference themselves.
pub struct RendererScope;

impl ContextKey for RendererScope {
  type Value = ScopedRenderer;
}

/// A handle for running nested renders with the enclosing render call's
/// string formatter.
#[derive(Clone)]
pub struct ScopedRenderer {
  formatter: StringFormatter,
}

impl ScopedRenderer {
  pub fn new(formatter: StringFormatter) -> Self {
    Self { formatter }
  }

  /// Renders `component` in the given context.
  pub fn render(
    &self,
    component: Component,
    ctx: Context,
  ) -> BoxFuture<'static, Result<String, RenderError>> {
    render_component(component, ctx, self.formatter.clone())
  }
}

/// Top-level component dispatch.
///
/// Text shapes return immediately; sequences render their elements
/// concurrently and concatenate in declaration order; a resolvable node runs
/// the slot-chain tree renderer.
pub(crate) fn render_component(
  component: Component,
  ctx: Context,
  formatter: StringFormatter,
) -> BoxFuture<'static, Result<String, RenderError>> {
  Box::pin(async move {
    match component {
      Component::Text(text) => Ok(formatter(&text)),
      Component::Raw(text) => Ok(text),
      Component::Nothing => Ok(String::new()),
      Component::List(items) => {
        let parts = join_all(
          items
            .into_iter()
            .map(|item| render_component(item, ctx.clone(), formatter.clone())),
        )
        .await;
        let mut out = String::new();
        for part in parts {
          out.push_str(&part?);
        }
        Ok(out)
      }
      Component::Node(node) => TreeRenderer::new(node, ctx, formatter).run().await,
    }
  })
}
