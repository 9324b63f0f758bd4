//! Element rendering through the engine.

use vellum_html::{AttrValue, Formatter, XBool, div, doctype, h1, img, span};
use vellum_render::{Component, Renderer};

#[tokio::test]
async fn void_element_renders_attributes_only() {
  let out = Renderer::new()
    .render(img().attr("src", "/example.png"))
    .await
    .unwrap();
  assert_eq!(out, "<img src=\"/example.png\"/>");

  let out = Renderer::new().render(Component::from(img())).await.unwrap();
  assert_eq!(out, "<img/>");
}

#[tokio::test]
async fn element_children_are_separated_by_newlines() {
  let out = Renderer::new()
    .render(div().child("a").child("b"))
    .await
    .unwrap();
  assert_eq!(out, "<div>\na\nb\n</div>");
}

#[tokio::test]
async fn inline_element_has_no_separators() {
  let out = Renderer::new()
    .render(h1().inline().child("Title"))
    .await
    .unwrap();
  assert_eq!(out, "<h1>Title</h1>");
}

#[tokio::test]
async fn empty_element_renders_bare_tags() {
  let out = Renderer::new().render(div()).await.unwrap();
  assert_eq!(out, "<div></div>");
}

#[tokio::test]
async fn child_text_is_escaped_but_markup_is_not() {
  let out = Renderer::new()
    .render(span().inline().child("a < b"))
    .await
    .unwrap();
  assert_eq!(out, "<span>a &lt; b</span>");
}

#[tokio::test]
async fn attributes_follow_formatter_rules() {
  let tag = div()
    .attr("data_id", 7)
    .attr("_class", "w-full")
    .attr("checked", XBool::True)
    .attr("hidden", XBool::False);
  let out = Renderer::new().render(tag).await.unwrap();
  assert_eq!(out, "<div data-id=\"7\" class=\"w-full\" checked=\"\"></div>");
}

#[tokio::test]
async fn context_formatter_overrides_the_default() {
  let formatter = Formatter::new().value_formatter(|value| match value {
    AttrValue::Int(i) => Some(format!("int:{i}")),
    other => Formatter::default_value(other),
  });
  let tree = formatter.in_context([div().attr("dp", 123).into()]);

  let out = Renderer::new().render(tree).await.unwrap();
  assert_eq!(out, "<div dp=\"int:123\"></div>");
}

#[tokio::test]
async fn nested_elements_compose() {
  let page = div()
    .attr("id", "root")
    .child(doctype())
    .child(span().inline().child("hi"));
  let out = Renderer::new().render(page).await.unwrap();
  assert_eq!(
    out,
    "<div id=\"root\">\n<!DOCTYPE html>\n<span>hi</span>\n</div>"
  );
}
