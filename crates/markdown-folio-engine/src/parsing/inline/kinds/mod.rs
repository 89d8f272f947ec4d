//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Delimiter`**: paired markers `**`, `*`, `_` and `` ` `` with their span types
//! - **`Image`** / **`Link`**: `![alt](url)` and `[text](url)` patterns
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in splitter code.

pub mod delimiter;
pub mod link;

pub use delimiter::Delimiter;
pub use link::{Image, Link};
