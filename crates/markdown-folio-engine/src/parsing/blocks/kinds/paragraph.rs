use super::{BlockQuote, List};

/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default leaf block
/// when no other block opener matches. Inline parsing is applied
/// to paragraph content.
pub struct Paragraph;

/// Rendering shape of a paragraph, derived from the prefixes of its lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphShape {
    Plain,
    Quote,
    UnorderedList,
    OrderedList,
}

impl Paragraph {
    /// Classifies a paragraph by checking that every line carries the same prefix.
    pub fn shape(text: &str) -> ParagraphShape {
        let lines: Vec<&str> = text.lines().collect();
        if lines.is_empty() {
            return ParagraphShape::Plain;
        }
        if lines.iter().all(|l| BlockQuote::is_quoted(l)) {
            ParagraphShape::Quote
        } else if lines.iter().all(|l| List::unordered_item(l).is_some()) {
            ParagraphShape::UnorderedList
        } else if lines
            .iter()
            .enumerate()
            .all(|(i, l)| List::ordered_item(l, i + 1).is_some())
        {
            ParagraphShape::OrderedList
        } else {
            ParagraphShape::Plain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("just words\nmore words", ParagraphShape::Plain)]
    #[case("> quoted\n> lines", ParagraphShape::Quote)]
    #[case("> quoted\nnot quoted", ParagraphShape::Plain)]
    #[case("- one\n- two", ParagraphShape::UnorderedList)]
    #[case("* one\n- two", ParagraphShape::UnorderedList)]
    #[case("1. one\n2. two\n3. three", ParagraphShape::OrderedList)]
    #[case("1. one\n3. three", ParagraphShape::Plain)]
    #[case("-not a list", ParagraphShape::Plain)]
    fn paragraph_shape(#[case] text: &str, #[case] expected: ParagraphShape) {
        assert_eq!(Paragraph::shape(text), expected);
    }
}
