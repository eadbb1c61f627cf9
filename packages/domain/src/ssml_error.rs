//! Unified error for the fluent SSML chain.
use std::fmt;

use thiserror::Error;

/// One of the three exclusive nestable constructs tracked by the builder.
///
/// Each is guarded by its own open/closed flag; the flags are mutually
/// independent, and only one instance of each construct may be open at a
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    /// `<lang>` span.
    Language,
    /// `<p>` paragraph.
    Paragraph,
    /// `<s>` sentence.
    Sentence,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Construct::Language => "language",
            Construct::Paragraph => "paragraph",
            Construct::Sentence => "sentence",
        })
    }
}

/// Top-level error covering every fluent SSML operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SsmlError {
    /// An argument failed a vocabulary or pattern check.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A construct was started while the same construct is still open.
    #[error("a {0} has been started but not ended; end it before starting another")]
    AlreadyOpen(Construct),
    /// The document was built while a construct remains open.
    #[error("{0} has been started but not ended")]
    UnclosedConstruct(Construct),
}
