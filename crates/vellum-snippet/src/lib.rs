//! Text snippets as components.
//!
//! A [`Snippet`] pulls its content from a file or an inline string,
//! optionally runs it through a text processor, and renders the result
//! verbatim. Combined with [`Slots`], placeholder comments inside the
//! text are substituted with arbitrary components, which makes
//! snippets a lightweight templating layer on top of the renderer.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;
use vellum_render::{Component, Context, Render, RenderError, Resolution};

mod error;
mod slots;

pub use error::SnippetError;
pub use slots::Slots;

/// Synchronous hook that rewrites snippet text before slot resolution.
pub type TextProcessor = Arc<dyn Fn(&str, &Context) -> Result<String, RenderError> + Send + Sync>;

/// Reads a UTF-8 text file, mapping IO failures to [`SnippetError::Read`].
pub async fn load_text_file(path: impl AsRef<Path>) -> Result<String, SnippetError> {
  let path = path.as_ref();
  debug!(path = %path.display(), "loading snippet file");
  tokio::fs::read_to_string(path)
    .await
    .map_err(|source| SnippetError::Read {
      path: path.to_path_buf(),
      source,
    })
}

#[derive(Clone)]
enum Source {
  Inline(String),
  File(PathBuf),
}

/// Component whose content is a text snippet.
///
/// Snippet text is rendered without escaping. If a [`Slots`] resolver
/// is attached, placeholders in the text are substituted first.
#[derive(Clone)]
pub struct Snippet {
  source: Source,
  processor: Option<TextProcessor>,
  slots: Option<Slots>,
}

impl Snippet {
  /// Snippet backed by a file, read when the component resolves.
  pub fn file(path: impl Into<PathBuf>) -> Self {
    Snippet {
      source: Source::File(path.into()),
      processor: None,
      slots: None,
    }
  }

  /// Snippet with inline content.
  pub fn inline(text: impl Into<String>) -> Self {
    Snippet {
      source: Source::Inline(text.into()),
      processor: None,
      slots: None,
    }
  }

  /// Rewrites the snippet text before slots are resolved. The
  /// processor also sees the render context of the snippet.
  pub fn text_processor<F>(mut self, processor: F) -> Self
  where
    F: Fn(&str, &Context) -> Result<String, RenderError> + Send + Sync + 'static,
  {
    self.processor = Some(Arc::new(processor));
    self
  }

  /// Attaches a slot resolver to the snippet.
  pub fn slots(mut self, slots: Slots) -> Self {
    self.slots = Some(slots);
    self
  }
}

impl Render for Snippet {
  fn resolve(&self, ctx: &Context) -> Resolution {
    let snippet = self.clone();
    let ctx = ctx.clone();
    Resolution::pending(async move {
      let text = match &snippet.source {
        Source::Inline(text) => text.clone(),
        Source::File(path) => load_text_file(path).await.map_err(RenderError::component)?,
      };
      let text = match &snippet.processor {
        Some(processor) => processor(&text, &ctx)?,
        None => text,
      };
      match &snippet.slots {
        None => Ok(Component::Raw(text)),
        Some(slots) => {
          let parts = slots.resolve_text(&text).map_err(RenderError::component)?;
          Ok(Component::List(parts))
        }
      }
    })
  }
}

impl From<Snippet> for Component {
  fn from(snippet: Snippet) -> Self {
    Component::node(snippet)
  }
}
