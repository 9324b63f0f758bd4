//! Context-aware translation resource loading.
//!
//! Translation resources are JSON object files laid out under a root
//! directory. A dot-separated resource path selects the file
//! (`"page.home"` -> `<root>/page/home.json`), and a dot-separated key walks
//! the nested objects inside it. Loaded files are cached for the lifetime of
//! the [`I18n`] instance, which is cheap to clone and share; typically it is
//! registered in the rendering context so any component in the subtree can
//! translate.

mod error;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde_json::Value;
use tracing::debug;
use vellum_render::{Component, ContextKey, Layer, WithContext};

pub use error::I18nError;

/// Keys that select the entire resource file instead of a value inside it.
const ROOT_KEYS: [&str; 2] = ["", "."];

/// Caches parsed translation resources by path.
///
/// The cache is unbounded: it holds one entry per resource file, and an
/// instance serves a fixed translation set, so its size is capped by the
/// number of files under the configured roots.
#[derive(Clone, Default)]
struct ResourceCache {
  inner: Arc<RwLock<HashMap<PathBuf, Arc<Value>>>>,
}

impl ResourceCache {
  fn get(&self, path: &Path) -> Option<Arc<Value>> {
    self.inner.read().unwrap().get(path).cloned()
  }

  fn insert(&self, path: PathBuf, value: Arc<Value>) {
    self.inner.write().unwrap().insert(path, value);
  }
}

/// Async internationalization utility.
#[derive(Clone)]
pub struct I18n {
  root: PathBuf,
  fallback: Option<PathBuf>,
  cache: ResourceCache,
}

impl ContextKey for I18n {
  type Value = I18n;
}

impl I18n {
  /// Creates an instance serving resources from the given root directory.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self {
      root: root.into(),
      fallback: None,
      cache: ResourceCache::default(),
    }
  }

  /// Adds a fallback root that is consulted when the primary root does not
  /// contain the requested resource or key.
  pub fn with_fallback(mut self, fallback: impl Into<PathBuf>) -> Self {
    self.fallback = Some(fallback.into());
    self
  }

  /// Wraps children in a context provider carrying this instance.
  pub fn in_context(&self, children: impl IntoIterator<Item = Component>) -> WithContext {
    WithContext::new(Layer::new().with::<I18n>(self.clone()), children)
  }

  /// Returns the string at `key` in the resource at `dotted_path`.
  pub async fn get(&self, dotted_path: &str, key: &str) -> Result<String, I18nError> {
    let value = self.get_value(dotted_path, key).await?;
    value
      .as_str()
      .map(str::to_string)
      .ok_or_else(|| I18nError::NotAString {
        key: key.to_string(),
      })
  }

  /// Returns the string at `key` with `{name}` placeholders substituted
  /// from `args`.
  ///
  /// Placeholders with no matching argument are left in place.
  pub async fn get_with(
    &self,
    dotted_path: &str,
    key: &str,
    args: &[(&str, &str)],
  ) -> Result<String, I18nError> {
    let mut text = self.get(dotted_path, key).await?;
    for (name, value) in args {
      text = text.replace(&format!("{{{name}}}"), value);
    }
    Ok(text)
  }

  /// Returns the raw JSON value at `key` in the resource at `dotted_path`.
  ///
  /// The keys `""` and `"."` select the whole resource object.
  pub async fn get_value(&self, dotted_path: &str, key: &str) -> Result<Value, I18nError> {
    match self.resolve(&self.root, dotted_path, key).await {
      Ok(value) => Ok(value),
      Err(err) => match &self.fallback {
        None => Err(err),
        Some(fallback) => self.resolve(fallback, dotted_path, key).await,
      },
    }
  }

  async fn resolve(&self, root: &Path, dotted_path: &str, key: &str) -> Result<Value, I18nError> {
    let path = resolve_resource_path(root, dotted_path)?;
    let resource = self.load(path).await?;

    if ROOT_KEYS.contains(&key) {
      return Ok((*resource).clone());
    }

    let mut current: &Value = &resource;
    for part in key.split('.') {
      current = current.get(part).ok_or_else(|| I18nError::KeyNotFound {
        key: key.to_string(),
      })?;
    }
    Ok(current.clone())
  }

  async fn load(&self, path: PathBuf) -> Result<Arc<Value>, I18nError> {
    if let Some(resource) = self.cache.get(&path) {
      return Ok(resource);
    }

    debug!(path = %path.display(), "loading translation resource");
    let content =
      tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| I18nError::NotFound {
          path: path.clone(),
          source,
        })?;
    let value: Value = serde_json::from_str(&content).map_err(|source| I18nError::Decode {
      path: path.clone(),
      source,
    })?;
    if !value.is_object() {
      return Err(I18nError::NotAnObject { path });
    }

    let resource = Arc::new(value);
    self.cache.insert(path, resource.clone());
    Ok(resource)
  }
}

/// Maps a dotted resource path to a file path under `root`
/// (`"page.home"` -> `root/page/home.json`).
fn resolve_resource_path(root: &Path, dotted_path: &str) -> Result<PathBuf, I18nError> {
  let mut parts: Vec<&str> = dotted_path.split('.').collect();
  let name = parts.pop().filter(|name| !name.is_empty()).ok_or_else(|| {
    I18nError::InvalidPath {
      path: dotted_path.to_string(),
    }
  })?;

  let mut path = root.to_path_buf();
  for dir in parts {
    path.push(dir);
  }
  path.push(format!("{name}.json"));
  Ok(path)
}
