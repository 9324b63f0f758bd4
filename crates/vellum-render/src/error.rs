//! Rendering errors.

/// Errors that can occur while rendering a component tree.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
  /// A component's resolution or context extension failed.
  ///
  /// The original failure is carried unmodified so callers (and error
  /// boundaries) can downcast to the concrete error type.
  #[error(transparent)]
  Component(#[from] anyhow::Error),

  /// A required context value was absent from the context chain.
  #[error("missing context value: {key}")]
  MissingContext { key: &'static str },
}

impl RenderError {
  /// Wraps an arbitrary component failure.
  pub fn component<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    RenderError::Component(anyhow::Error::new(err))
  }

  /// Returns whether this is a component failure of type `E`, either directly
  /// or anywhere in its source chain.
  pub fn is<E>(&self) -> bool
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    match self {
      RenderError::Component(err) => err.chain().any(|cause| cause.downcast_ref::<E>().is_some()),
      RenderError::MissingContext { .. } => false,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, thiserror::Error)]
  #[error("boom")]
  struct Boom;

  #[derive(Debug, thiserror::Error)]
  #[error("outer")]
  struct Outer(#[source] Boom);

  #[test]
  fn is_matches_direct_error() {
    let err = RenderError::component(Boom);
    assert!(err.is::<Boom>());
    assert!(!err.is::<Outer>());
  }

  #[test]
  fn is_matches_source_chain() {
    let err = RenderError::component(Outer(Boom));
    assert!(err.is::<Outer>());
    assert!(err.is::<Boom>());
  }

  #[test]
  fn missing_context_matches_nothing() {
    let err = RenderError::MissingContext { key: "Foo" };
    assert!(!err.is::<Boom>());
  }
}
