//! # Block Segmentation
//!
//! Two-phase block segmentation over the lines of a document.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (blank status, fence signature, heading level)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` state machine tracks whether
//!    a fence is open, accumulates paragraph lines and emits `BlockNode`s
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, Paragraph,
//!   BlockQuote, List)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - No empty block is ever emitted
//! - Fenced code blocks are raw zones: interior lines are kept verbatim and
//!   never reinterpreted as headings or paragraph boundaries
//! - An unterminated fence is closed at end of input; nothing is dropped

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use kinds::ParagraphShape;
pub use types::{BlockKind, BlockNode};
