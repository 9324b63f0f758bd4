//! Snippet errors.

use std::path::PathBuf;

/// Errors that can occur while loading or resolving snippets.
#[derive(Debug, thiserror::Error)]
pub enum SnippetError {
  /// The snippet file could not be read.
  #[error("failed to read snippet: {}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// A slot key had no component in the slot mapping.
  #[error("no component for slot: {key}")]
  SlotNotFound { key: String },
}
