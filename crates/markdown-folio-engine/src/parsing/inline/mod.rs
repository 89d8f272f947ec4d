//! # Inline Splitting
//!
//! Turns a block's inline text into a flat sequence of typed spans by
//! repeatedly re-splitting the spans still typed as plain text.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` and `InlineType`
//! - **`kinds`**: Inline-specific types with owned delimiters (`Delimiter`, `Image`, `Link`)
//! - **`cursor`**: `Cursor` for char-by-char scanning of flanking emphasis markers
//! - **`splitter`**: `split_spans()` (one delimiter pass) and `split_pattern()`
//! - **`parser`**: `parse_inline()` runs every pass in precedence order
//!
//! ## Precedence
//!
//! Passes run `**`, `*`, `_`, `` ` ``, images, links. A span typed by an earlier
//! pass is never re-scanned, so `` **`x`** `` is bold text containing backticks.
//!
//! ## Invariant
//!
//! Concatenating the text of the spans produced by the delimiter passes
//! reproduces the input minus the matched delimiter characters.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod splitter;
pub mod types;

pub use parser::parse_inline;
pub use splitter::{split_pattern, split_spans};
pub use types::{InlineSpan, InlineType};
