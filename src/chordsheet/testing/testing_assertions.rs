//! Fluent assertion API for parsed documents

use crate::chordsheet::ast::{AstNode, LineBlock, ParsedDocument, Section, SectionName};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_doc(doc: &ParsedDocument) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a ParsedDocument,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of sections in the document
    pub fn section_count(self, expected: usize) -> Self {
        let actual = self.doc.sections.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} sections, found {}: [{}]",
            expected,
            actual,
            summarize_sections(&self.doc.sections)
        );
        self
    }

    /// Assert the section names, in order (anonymous sections read as "")
    pub fn section_names(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.doc.sections.iter().map(|s| s.label()).collect();
        assert_eq!(actual, expected, "Section names differ");
        self
    }

    pub fn no_warnings(self) -> Self {
        assert!(
            self.doc.warnings.is_empty(),
            "Expected no warnings, found {:?}",
            self.doc.warnings
        );
        self
    }

    /// Assert on a specific section by index
    pub fn section<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SectionAssertion<'a>),
    {
        assert!(
            index < self.doc.sections.len(),
            "Section index {} out of bounds (document has {} sections)",
            index,
            self.doc.sections.len()
        );
        assertion(SectionAssertion {
            section: &self.doc.sections[index],
            context: format!("sections[{}]", index),
        });
        self
    }
}

// ============================================================================
// Section Assertions
// ============================================================================

pub struct SectionAssertion<'a> {
    section: &'a Section,
    context: String,
}

impl<'a> SectionAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.section.name,
            SectionName::Named(expected.to_string()),
            "{}: section name mismatch",
            self.context
        );
        self
    }

    pub fn anonymous(self) -> Self {
        assert_eq!(
            self.section.name,
            SectionName::Anonymous,
            "{}: expected an anonymous section",
            self.context
        );
        self
    }

    pub fn explicit(self) -> Self {
        assert!(
            !self.section.implicit,
            "{}: expected an explicit section, found an implicit one",
            self.context
        );
        self
    }

    pub fn implicit(self) -> Self {
        assert!(
            self.section.implicit,
            "{}: expected an implicit section, found {}",
            self.context,
            self.section.display_label()
        );
        self
    }

    pub fn line_count(self, expected: usize) -> Self {
        let actual = self.section.lines.len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} lines, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize_lines(&self.section.lines)
        );
        self
    }

    pub fn line<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(LineAssertion<'a>),
    {
        assert!(
            index < self.section.lines.len(),
            "{}: line index {} out of bounds (section has {} lines)",
            self.context,
            index,
            self.section.lines.len()
        );
        assertion(LineAssertion {
            line: &self.section.lines[index],
            context: format!("{}.lines[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Line Assertions
// ============================================================================

pub struct LineAssertion<'a> {
    line: &'a LineBlock,
    context: String,
}

impl LineAssertion<'_> {
    pub fn lyrics(self, expected: &str) -> Self {
        assert_eq!(
            self.line.lyrics, expected,
            "{}: lyric mismatch",
            self.context
        );
        self
    }

    pub fn lyrics_contain(self, needle: &str) -> Self {
        assert!(
            self.line.lyrics.contains(needle),
            "{}: expected lyric to contain '{}', found '{}'",
            self.context,
            needle,
            self.line.lyrics
        );
        self
    }

    pub fn chords(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.line.symbols(),
            expected,
            "{}: chord symbols mismatch",
            self.context
        );
        self
    }

    pub fn columns(self, expected: &[usize]) -> Self {
        assert_eq!(
            self.line.columns(),
            expected,
            "{}: chord columns mismatch",
            self.context
        );
        self
    }

    pub fn no_chords(self) -> Self {
        assert!(
            self.line.chords.is_empty(),
            "{}: expected no chords, found {:?}",
            self.context,
            self.line.symbols()
        );
        self
    }

    pub fn blank(self) -> Self {
        assert!(
            self.line.is_blank(),
            "{}: expected a blank line, found {}",
            self.context,
            self.line
        );
        self
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn summarize_sections(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|s| format!("{}({})", s.node_type(), s.display_label()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn summarize_lines(lines: &[LineBlock]) -> String {
    lines
        .iter()
        .map(|l| l.display_label())
        .collect::<Vec<_>>()
        .join(" | ")
}
