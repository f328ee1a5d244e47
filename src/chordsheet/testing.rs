//! Testing utilities for parsed documents
//!
//! # Parser Testing Guidelines
//!
//! 1. **Use [Samples](samples::Samples) for whole-document content.** The files in
//!    `tests/fixtures/` are the vetted chord sheets; reach for them instead of
//!    pasting long sheets into tests. Short inline snippets are fine for edge
//!    cases the fixtures do not cover.
//! 2. **Use [assert_doc] for structure.** Asserting only section counts says very
//!    little; the fluent API checks names, chords, columns and lyrics in one go.
//!
//! ```rust,ignore
//! use chordsheet::chordsheet::parser::parse_document;
//! use chordsheet::chordsheet::testing::assert_doc;
//!
//! let doc = parse_document("{start_of_section: Verse}\n[C]Line 1\n{end_of_section}").unwrap();
//! assert_doc(&doc).section_count(1).section(0, |s| {
//!     s.name("Verse").explicit().line_count(1).line(0, |l| {
//!         l.chords(&["C"]).columns(&[0]).lyrics("Line 1");
//!     });
//! });
//! ```

pub mod samples;
pub mod testing_assertions;

pub use samples::Samples;
pub use testing_assertions::{assert_doc, DocumentAssertion, LineAssertion, SectionAssertion};
