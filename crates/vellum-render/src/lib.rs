//! Component-tree rendering engine.
//!
//! A component tree is a value of the [`Component`] sum type: plain text,
//! pre-escaped text, nothing, an ordered sequence, or a resolvable node. The
//! renderer walks the tree exactly once per node, resolves every node to its
//! textual contribution, and concatenates the contributions in document order,
//! regardless of the order in which asynchronous nodes complete.
//!
//! # Architecture
//!
//! ```text
//! Renderer
//! ├── render(component) - render with the default context
//! └── render_with(component, layer) - render with an extra context layer
//!
//! TreeRenderer (internal)
//! ├── sync queue - nodes whose resolution completes without suspending
//! ├── async batch - suspending resolutions, awaited together per generation
//! └── slot arena - ordered result slots, spliced in place on expansion
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use vellum_render::{Component, Renderer};
//!
//! let renderer = Renderer::new();
//! let html = renderer.render(Component::from("<b>hi</b>")).await?;
//! assert_eq!(html, "&lt;b&gt;hi&lt;/b&gt;");
//! ```

mod boundary;
mod component;
mod components;
mod context;
mod error;
mod escape;
mod renderer;
mod tree;

pub use boundary::ErrorBoundary;
pub use component::{Component, ContextStep, Render, RenderResult, Resolution};
pub use components::{Fragment, WithContext};
pub use context::{Context, ContextKey, Layer};
pub use error::RenderError;
pub use escape::{StringFormatter, xml_escape};
pub use renderer::{Renderer, RendererScope, ScopedRenderer};
