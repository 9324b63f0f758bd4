//! i18n errors.

use std::path::PathBuf;

/// Errors that can occur while loading or querying translation resources.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
  /// The translation resource file does not exist or could not be read.
  #[error("translation resource not found: {}", path.display())]
  NotFound {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The translation resource is not valid JSON.
  #[error("translation resource decoding failed: {}", path.display())]
  Decode {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  /// The translation resource is valid JSON but not an object.
  #[error("translation resource must be a JSON object: {}", path.display())]
  NotAnObject { path: PathBuf },

  /// The requested key is absent from the translation resource.
  #[error("translation key not found: {key}")]
  KeyNotFound { key: String },

  /// The value under the requested key is not a string.
  #[error("translation value at '{key}' is not a string")]
  NotAString { key: String },

  /// The dotted resource path is malformed.
  #[error("invalid translation resource path: {path}")]
  InvalidPath { path: String },
}
