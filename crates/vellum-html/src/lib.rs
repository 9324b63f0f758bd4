//! HTML tag components and attribute formatting.
//!
//! Tags are ordinary components built on the `vellum-render` component
//! contract; there is no extra engine logic here. An [`Element`] resolves to
//! pre-escaped open/close markup around its children, and attribute
//! formatting is a pure data-to-string concern handled by [`Formatter`],
//! which can be overridden per subtree through the rendering context.

mod attr;
mod element;
mod tags;

pub use attr::{AttrValue, Formatter, XBool, quote_attr};
pub use element::Element;
pub use tags::*;
