pub mod io;
pub mod page;
pub mod parsing;
pub mod render;


// Re-export key types for easier usage
pub use io::IoError;
pub use page::{PageError, PageMeta};
pub use parsing::{
    BlockContent, ParseError, ParsedBlock, ParsedDoc,
    blocks::{BlockKind, BlockNode},
    inline::{InlineSpan, InlineType, parse_inline, split_spans},
    parse_document, segment, segment_strings,
};
pub use render::{markdown_to_html, to_html};
