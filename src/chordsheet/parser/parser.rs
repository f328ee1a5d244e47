//! Section state machine
//!
//! [SectionParser] is fed one line at a time and tracks the section that is
//! currently open. It never looks ahead or back, which keeps every error tied to
//! the line that caused it.

use crate::chordsheet::ast::{LineBlock, ParsedDocument, Section, SectionName};
use crate::chordsheet::lexer::tokenize_line;
use crate::chordsheet::parser::directives::{classify_line, LineKind};
use crate::chordsheet::parser::error::{ParseError, ParseErrorKind};

/// The section currently receiving lines
#[derive(Debug)]
enum OpenSection {
    None,
    Implicit(Section),
    Explicit { section: Section, opened_at: usize },
}

/// Incremental parser over the lines of one document
#[derive(Debug)]
pub struct SectionParser {
    sections: Vec<Section>,
    open: OpenSection,
    last_line: usize,
}

impl SectionParser {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            open: OpenSection::None,
            last_line: 0,
        }
    }

    /// Consume one source line; `line_number` is 1-based
    pub fn feed(&mut self, line_number: usize, line: &str) -> Result<(), ParseError> {
        self.last_line = line_number;
        match classify_line(line) {
            LineKind::Blank => {
                self.push_blank();
                Ok(())
            }
            LineKind::SectionStart(name) => self.start_section(line_number, name),
            LineKind::SectionEnd => self.end_section(line_number),
            LineKind::MalformedDirective => Err(ParseError::new(
                line_number,
                ParseErrorKind::InvalidSectionSyntax,
            )),
            LineKind::Content(content) => self.push_content(line_number, content),
        }
    }

    /// Close whatever is still open and hand back the document
    pub fn finish(mut self) -> Result<ParsedDocument, ParseError> {
        match std::mem::replace(&mut self.open, OpenSection::None) {
            OpenSection::None => {}
            OpenSection::Implicit(section) => self.sections.push(section),
            OpenSection::Explicit { opened_at, .. } => {
                tracing::debug!(opened_at, "section still open at end of input");
                return Err(ParseError::new(
                    self.last_line.max(opened_at),
                    ParseErrorKind::UnclosedSection,
                ));
            }
        }
        Ok(ParsedDocument::with_sections(self.sections))
    }

    fn start_section(&mut self, line_number: usize, name: SectionName) -> Result<(), ParseError> {
        match std::mem::replace(&mut self.open, OpenSection::None) {
            OpenSection::None => {}
            OpenSection::Implicit(section) => self.sections.push(section),
            open @ OpenSection::Explicit { .. } => {
                self.open = open;
                return Err(ParseError::new(line_number, ParseErrorKind::NestedSection));
            }
        }
        let section = match name {
            SectionName::Named(name) => Section::named(name),
            SectionName::Anonymous => Section::anonymous(),
        };
        self.open = OpenSection::Explicit {
            section,
            opened_at: line_number,
        };
        Ok(())
    }

    fn end_section(&mut self, line_number: usize) -> Result<(), ParseError> {
        match std::mem::replace(&mut self.open, OpenSection::None) {
            OpenSection::Explicit { section, .. } => {
                self.sections.push(section);
                Ok(())
            }
            other => {
                self.open = other;
                Err(ParseError::new(line_number, ParseErrorKind::UnmatchedEnd))
            }
        }
    }

    fn push_blank(&mut self) {
        match &mut self.open {
            OpenSection::None => {}
            OpenSection::Implicit(section) | OpenSection::Explicit { section, .. } => {
                section.push(LineBlock::blank());
            }
        }
    }

    fn push_content(&mut self, line_number: usize, content: &str) -> Result<(), ParseError> {
        let block = tokenize_line(content);
        if block.lyrics.contains(&['[', ']'][..]) {
            return Err(ParseError::new(
                line_number,
                ParseErrorKind::InvalidChordSyntax,
            ));
        }
        if let OpenSection::None = self.open {
            self.open = OpenSection::Implicit(Section::implicit());
        }
        if let OpenSection::Implicit(section) | OpenSection::Explicit { section, .. } =
            &mut self.open
        {
            section.push(block);
        }
        Ok(())
    }
}

impl Default for SectionParser {
    fn default() -> Self {
        Self::new()
    }
}
