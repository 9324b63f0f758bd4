//! Layered rendering context.
//!
//! The context is a persistent chain of immutable key-value layers. Lookup
//! walks from the innermost layer (nearest ancestor) outward; the first match
//! wins. "Extending" the context always means pushing a new layer in front of
//! the chain, so sibling subtrees never observe each other's layers.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::RenderError;

/// Marker trait for context keys.
///
/// Keys are types, not values; a key type declares the type of the value
/// stored under it. Implement it on a dedicated marker type, or on the value
/// type itself when no abstraction is needed:
///
/// ```ignore
/// struct Theme;
/// impl ContextKey for Theme {
///   type Value = String;
/// }
/// ```
pub trait ContextKey: 'static {
  type Value: Send + Sync + 'static;
}

/// One immutable key-value layer of the context chain.
#[derive(Clone, Default)]
pub struct Layer {
  entries: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Layer {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds a value under key `K`.
  pub fn with<K: ContextKey>(self, value: K::Value) -> Self {
    self.with_arc::<K>(Arc::new(value))
  }

  /// Adds an already shared value under key `K`.
  ///
  /// This allows registering one allocation under several keys, e.g. under a
  /// concrete type and under the abstract capability it specializes.
  pub fn with_arc<K: ContextKey>(mut self, value: Arc<K::Value>) -> Self {
    self.entries.insert(TypeId::of::<K>(), value);
    self
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }
}

struct Frame {
  layer: Layer,
  parent: Option<Arc<Frame>>,
}

/// An ordered chain of context layers.
///
/// Cloning is cheap; the chain is shared, never copied. Layers are immutable
/// once pushed, so concurrent reads need no locking.
#[derive(Clone, Default)]
pub struct Context {
  head: Option<Arc<Frame>>,
}

impl Context {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns a new context with `layer` as the nearest scope.
  ///
  /// Pushing an empty layer returns the chain unchanged.
  pub fn push(&self, layer: Layer) -> Context {
    if layer.is_empty() {
      return self.clone();
    }
    Context {
      head: Some(Arc::new(Frame {
        layer,
        parent: self.head.clone(),
      })),
    }
  }

  /// Looks up the value under key `K`, innermost layer first.
  pub fn get<K: ContextKey>(&self) -> Option<&K::Value> {
    let mut frame = self.head.as_deref();
    while let Some(f) = frame {
      if let Some(value) = f.layer.entries.get(&TypeId::of::<K>()) {
        // The entry was inserted through `Layer::with::<K>`, so the downcast
        // cannot fail.
        return value.downcast_ref::<K::Value>();
      }
      frame = f.parent.as_deref();
    }
    None
  }

  /// Looks up the value under key `K`, failing if it is absent.
  pub fn require<K: ContextKey>(&self) -> Result<&K::Value, RenderError> {
    self.get::<K>().ok_or(RenderError::MissingContext {
      key: std::any::type_name::<K>(),
    })
  }
}

impl From<Layer> for Context {
  fn from(layer: Layer) -> Self {
    Context::new().push(layer)
  }
}
