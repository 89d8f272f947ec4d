//! # HTML Emission
//!
//! Renders a [`ParsedDoc`](crate::parsing::ParsedDoc) into an HTML fragment.
//! Every piece of source text is escaped; nothing from the document is
//! emitted as raw HTML.

pub mod html;

pub use html::{markdown_to_html, to_html};
