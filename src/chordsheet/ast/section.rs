//! Section element definition

use super::line_block::LineBlock;
use super::traits::AstNode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The declared name of a section
///
/// `Anonymous` is a section without a name: either an explicit
/// `{start_of_section}` or one the parser opened on its own. `Named("")` is a
/// deliberately empty explicit name, `{start_of_section:}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    Named(String),
    Anonymous,
}

impl SectionName {
    /// The header text, or `""` for anonymous sections
    pub fn as_str(&self) -> &str {
        match self {
            SectionName::Named(name) => name,
            SectionName::Anonymous => "",
        }
    }

    /// True when a header should be printed
    pub fn is_visible(&self) -> bool {
        !self.as_str().is_empty()
    }
}

/// A flat grouping of consecutive lines (verse, chorus, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: SectionName,
    /// Opened by the parser for free-floating lines rather than by a directive
    pub implicit: bool,
    pub lines: Vec<LineBlock>,
}

impl Section {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: SectionName::Named(name.into()),
            implicit: false,
            lines: Vec::new(),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            name: SectionName::Anonymous,
            implicit: false,
            lines: Vec::new(),
        }
    }

    pub fn implicit() -> Self {
        Self {
            name: SectionName::Anonymous,
            implicit: true,
            lines: Vec::new(),
        }
    }

    pub fn with_lines(mut self, lines: Vec<LineBlock>) -> Self {
        self.lines = lines;
        self
    }

    pub fn push(&mut self, line: LineBlock) {
        self.lines.push(line);
    }

    pub fn label(&self) -> &str {
        self.name.as_str()
    }

    pub fn iter_chords(&self) -> impl Iterator<Item = &super::ChordToken> {
        self.lines.iter().flat_map(|line| line.chords.iter())
    }
}

impl AstNode for Section {
    fn node_type(&self) -> &'static str {
        if self.implicit {
            "ImplicitSection"
        } else {
            "Section"
        }
    }
    fn display_label(&self) -> String {
        match &self.name {
            SectionName::Named(name) => name.clone(),
            SectionName::Anonymous => "<anonymous>".to_string(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Section('{}', {} lines)",
            self.name.as_str(),
            self.lines.len()
        )
    }
}
