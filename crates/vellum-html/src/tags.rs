//! The common HTML vocabulary.
//!
//! Each factory returns a bare [`Element`] to be filled in with attributes
//! and children:
//!
//! ```ignore
//! use vellum_html::{a, div};
//!
//! let link = div().child(a().attr("href", "/home").child("Home"));
//! ```

use vellum_render::Component;

use crate::element::Element;

macro_rules! tags {
  ($($name:ident),* $(,)?) => {$(
    #[doc = concat!("`<", stringify!($name), ">` element.")]
    pub fn $name() -> Element {
      Element::new(stringify!($name))
    }
  )*};
}

macro_rules! void_tags {
  ($($name:ident),* $(,)?) => {$(
    #[doc = concat!("`<", stringify!($name), ">` void element.")]
    pub fn $name() -> Element {
      Element::void(stringify!($name))
    }
  )*};
}

tags!(
  html, head, body, title, div, span, p, a, ul, ol, li, dl, dt, dd, table, caption, thead, tbody,
  tfoot, tr, td, th, form, button, label, fieldset, legend, select, option, textarea, section,
  article, aside, header, footer, nav, figure, figcaption, blockquote, pre, code, em, strong, i, b,
  u, s, small, sub, sup, mark, h1, h2, h3, h4, h5, h6, script, style, noscript, iframe, canvas,
  video, audio, details, summary, dialog, template, picture,
);

void_tags!(area, base, br, col, embed, hr, img, input, link, meta, source, track, wbr);

/// The HTML5 document type declaration.
pub fn doctype() -> Component {
  Component::raw("<!DOCTYPE html>")
}

/// An element with an arbitrary tag name.
pub fn custom(name: impl Into<String>) -> Element {
  Element::new(name)
}
