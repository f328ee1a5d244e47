//! Error types for parsing

use thiserror::Error;

/// Why a document was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseErrorKind {
    /// A start directive while an explicit section is open
    #[error("nested sections are not supported")]
    NestedSection,
    /// An end directive with no explicit section to close
    #[error("unmatched section end")]
    UnmatchedEnd,
    /// A brace outside of a well-formed directive
    #[error("invalid section syntax")]
    InvalidSectionSyntax,
    /// A bracket that is not part of a chord marker
    #[error("invalid chord syntax")]
    InvalidChordSyntax,
    /// An explicit section still open at end of input
    #[error("unclosed section")]
    UnclosedSection,
}

/// The single error surfaced by the parser
///
/// All parse errors are fatal for the whole document: callers reject the input
/// instead of rendering part of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line number the error was detected on
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }

    /// Human-readable reason, without the location
    pub fn reason(&self) -> String {
        self.kind.to_string()
    }
}
