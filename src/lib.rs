//! Server-side component tree rendering.
//!
//! The engine lives in `vellum-render`; this crate re-exports its API
//! and ships the batteries: HTML tags and attribute formatting
//! (`vellum-html`), JSON-backed translations (`vellum-i18n`) and text
//! snippets with slot substitution (`vellum-snippet`).
//!
//! ```no_run
//! use vellum::html::{body, h1, html};
//! use vellum::Renderer;
//!
//! # async fn demo() -> Result<(), vellum::RenderError> {
//! let page = html().child(body().child(h1().child("Hello!")));
//! let rendered = Renderer::new().render(page).await?;
//! # Ok(())
//! # }
//! ```

pub use vellum_render::{
  Component, Context, ContextKey, ContextStep, ErrorBoundary, Fragment, Layer, Render,
  RenderError, RenderResult, Renderer, RendererScope, Resolution, ScopedRenderer, StringFormatter,
  WithContext, xml_escape,
};

pub use vellum_html as html;
pub use vellum_i18n as i18n;
pub use vellum_snippet as snippet;
