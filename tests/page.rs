use std::time::Duration;

use vellum::html::{
  Formatter, body, div, doctype, h1, head, html, img, li, nav, p, span, title, ul,
};
use vellum::snippet::{Slots, Snippet};
use vellum::{
  Component, Context, ContextKey, ErrorBoundary, Fragment, Layer, Render, RenderError, Renderer,
  Resolution,
};

struct User;

impl ContextKey for User {
  type Value = String;
}

struct Greeting;

impl Render for Greeting {
  fn resolve(&self, ctx: &Context) -> Resolution {
    let ctx = ctx.clone();
    Resolution::pending(async move {
      tokio::time::sleep(Duration::from_millis(5)).await;
      let user = ctx.require::<User>()?;
      Ok(h1().inline().child(format!("Hello {user}!")).into())
    })
  }
}

#[derive(Debug, thiserror::Error)]
#[error("profile service unavailable")]
struct ProfileUnavailable;

struct Profile;

impl Render for Profile {
  fn resolve(&self, _ctx: &Context) -> Resolution {
    Resolution::pending(async { Err(RenderError::component(ProfileUnavailable)) })
  }
}

#[tokio::test]
async fn full_page_renders_in_document_order() {
  let page = Fragment::new([
    doctype(),
    html()
      .inline()
      .child(head().inline().child(title().inline().child("Site")))
      .child(
        body()
          .inline()
          .child(Component::node(Greeting))
          .child(
            ul()
              .inline()
              .child(li().inline().child("a & b"))
              .child(li().inline().child("c")),
          ),
      )
      .into(),
  ]);

  let renderer = Renderer::new().default_layer(Layer::new().with::<User>("Ada".to_string()));
  let markup = renderer.render(page).await.unwrap();
  assert_eq!(
    markup,
    "<!DOCTYPE html><html><head><title>Site</title></head>\
     <body><h1>Hello Ada!</h1><ul><li>a &amp; b</li><li>c</li></ul></body></html>"
  );
}

#[tokio::test]
async fn block_children_sit_on_their_own_lines() {
  let markup = Renderer::new()
    .render(div().child(p().inline().child("x")))
    .await
    .unwrap();
  assert_eq!(markup, "<div>\n<p>x</p>\n</div>");
}

#[tokio::test]
async fn boundary_keeps_the_rest_of_the_page_alive() {
  let page = div()
    .inline()
    .child(
      ErrorBoundary::new([Component::node(Profile)])
        .fallback(p().inline().child("profile unavailable"))
        .catch::<ProfileUnavailable>(),
    )
    .child(span().inline().child("footer"));

  let markup = Renderer::new().render(page).await.unwrap();
  assert_eq!(
    markup,
    "<div><p>profile unavailable</p><span>footer</span></div>"
  );
}

#[tokio::test]
async fn attribute_formatting_follows_context() {
  let formatter = Formatter::default()
    .name_formatter(|name| Some(format!("data-{}", name.replace('_', "-"))));
  let tree = formatter.in_context([img().attr("item_id", 7).into()]);

  let markup = Renderer::new().render(tree).await.unwrap();
  assert_eq!(markup, "<img data-item-id=\"7\"/>");
}

#[tokio::test]
async fn snippets_slot_into_the_page() {
  let snippet = Snippet::inline("<header><!-- slot[nav] --></header>")
    .slots(Slots::new().slot("nav", nav().inline().child("menu")));

  let markup = Renderer::new()
    .render(div().inline().child(snippet))
    .await
    .unwrap();
  assert_eq!(markup, "<div><header><nav>menu</nav></header></div>");
}
