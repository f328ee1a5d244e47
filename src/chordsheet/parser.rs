//! Parser module for chord sheets
//!
//! The parser walks the document line by line and groups lines into flat
//! sections. Explicit sections are opened and closed by directives; lines found
//! outside of any section are gathered into an implicit, nameless one.
//!
//! | Line                           | No section | Implicit open           | Explicit open |
//! |--------------------------------|------------|-------------------------|---------------|
//! | `{start_of_section[: NAME]}`   | open       | close implicit, open    | error: nested |
//! | `{end_of_section}`             | error      | error                   | close         |
//! | blank                          | dropped    | blank line              | blank line    |
//! | other                          | open implicit, append | append       | append        |
//!
//! Independently of state, a line with a brace that is not a well-formed directive
//! and a line whose brackets do not pair up into chord markers are rejected. An
//! explicit section still open at end of input is an error; an implicit one is
//! simply closed.
//!
//! ## Testing
//!
//! Shape assertions for parsed documents live in the [testing module](crate::chordsheet::testing).

pub mod directives;
pub mod error;
#[allow(clippy::module_inception)]
pub mod parser;

pub use directives::{classify_line, strip_to_lyrics, LineKind};
pub use error::{ParseError, ParseErrorKind};
pub use parser::SectionParser;

use crate::chordsheet::ast::ParsedDocument;

/// Main parser function that takes source text and returns a parsed document
/// This is the primary entry point for parsing chord sheets
pub fn parse_document(source: &str) -> Result<ParsedDocument, ParseError> {
    let mut parser = SectionParser::new();
    for (index, line) in source.lines().enumerate() {
        // a lone trailing CR survives `lines()`
        let line = line.strip_suffix('\r').unwrap_or(line);
        parser.feed(index + 1, line)?;
    }
    let doc = parser.finish()?;
    tracing::debug!(
        sections = doc.sections.len(),
        lines = doc.iter_lines().count(),
        "parsed chord sheet"
    );
    Ok(doc)
}

/// Check that a chord sheet is well formed without keeping the result
///
/// Editors call this before accepting new content: a document that fails here
/// would fail again on every render.
pub fn validate(source: &str) -> Result<(), ParseError> {
    parse_document(source).map(|_| ())
}
