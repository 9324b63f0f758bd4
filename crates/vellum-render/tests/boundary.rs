//! Error boundary recovery behavior.

use vellum_render::{
  Component, Context, ContextKey, ErrorBoundary, Layer, RenderError, Renderer, WithContext,
};

#[derive(Debug, thiserror::Error)]
#[error("value error")]
struct ValueError;

#[derive(Debug, thiserror::Error)]
#[error("io-ish error")]
struct OtherError;

struct Label;
impl ContextKey for Label {
  type Value = String;
}

fn failing() -> Component {
  Component::from_async_fn(|_ctx| async { Err(RenderError::component(ValueError)) })
}

#[tokio::test]
async fn accepted_failure_renders_the_fallback() {
  let boundary = ErrorBoundary::new([failing()])
    .fallback("fell back")
    .catch::<ValueError>();

  let out = Renderer::new().render(boundary).await.unwrap();
  assert_eq!(out, "fell back");
}

#[tokio::test]
async fn unaccepted_failure_propagates_unchanged() {
  let boundary = ErrorBoundary::new([failing()])
    .fallback("fell back")
    .catch::<OtherError>();

  let err = Renderer::new().render(boundary).await.unwrap_err();
  assert!(err.is::<ValueError>());
}

#[tokio::test]
async fn empty_accept_set_catches_everything() {
  let boundary = ErrorBoundary::new([failing()]).fallback("caught");
  let out = Renderer::new().render(boundary).await.unwrap();
  assert_eq!(out, "caught");

  // Including a missing required context value.
  let needs_label =
    Component::from_fn(|ctx: &Context| Ok(Component::from(ctx.require::<Label>()?.clone())));
  let boundary = ErrorBoundary::new([needs_label]).fallback("no label");
  let out = Renderer::new().render(boundary).await.unwrap();
  assert_eq!(out, "no label");
}

#[tokio::test]
async fn boundary_output_is_not_escaped_twice() {
  // Successful subtree: markup-significant text is escaped exactly once.
  let boundary = ErrorBoundary::new([Component::from("<x>")]);
  let out = Renderer::new().render(boundary).await.unwrap();
  assert_eq!(out, "&lt;x&gt;");

  // Fallback content is inserted as already-final text.
  let boundary = ErrorBoundary::new([failing()]).fallback(Component::raw("<b>ok</b>"));
  let out = Renderer::new().render(boundary).await.unwrap();
  assert_eq!(out, "<b>ok</b>");
}

#[tokio::test]
async fn fallback_resolves_in_the_enclosing_context() {
  // The failing subtree overrides Label; the fallback must still see the
  // boundary's own pre-subtree value.
  let read_label =
    Component::from_fn(|ctx: &Context| Ok(Component::from(ctx.require::<Label>()?.clone())));

  let failing_subtree = WithContext::new(
    Layer::new().with::<Label>("inner".to_string()),
    [failing()],
  );
  let boundary = ErrorBoundary::new([failing_subtree.into()])
    .fallback(read_label)
    .catch::<ValueError>();
  let tree = WithContext::new(Layer::new().with::<Label>("outer".to_string()), [
    boundary.into(),
  ]);

  let out = Renderer::new().render(tree).await.unwrap();
  assert_eq!(out, "outer");
}

#[tokio::test]
async fn sibling_boundaries_recover_independently() {
  let left = ErrorBoundary::new([failing()]).fallback("F1").catch::<ValueError>();
  let right = ErrorBoundary::new([Component::from("ok")]).fallback("F2");

  let out = Renderer::new()
    .render(vec![left.into(), right.into()])
    .await
    .unwrap();
  assert_eq!(out, "F1ok");
}

#[tokio::test]
async fn failing_fallback_propagates() {
  let boundary = ErrorBoundary::new([failing()])
    .fallback(Component::from_fn(|_ctx| {
      Err(RenderError::component(OtherError))
    }))
    .catch::<ValueError>();

  let err = Renderer::new().render(boundary).await.unwrap_err();
  assert!(err.is::<OtherError>());
}
