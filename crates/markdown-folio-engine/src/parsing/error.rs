use thiserror::Error;

/// Structural errors raised while splitting inline text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A paired delimiter occurs an odd number of times within one text span.
    #[error("unbalanced delimiter: {delimiter}")]
    UnbalancedDelimiter { delimiter: String },
}
