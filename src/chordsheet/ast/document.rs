//! Document element definition

use super::line_block::{ChordToken, LineBlock};
use super::section::Section;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The root of a parsed chord sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub sections: Vec<Section>,
    /// Non-fatal findings; the parser does not emit any yet
    pub warnings: Vec<String>,
}

impl ParsedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sections(sections: Vec<Section>) -> Self {
        Self {
            sections,
            warnings: Vec::new(),
        }
    }

    pub fn iter_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn iter_lines(&self) -> impl Iterator<Item = &LineBlock> {
        self.sections.iter().flat_map(|s| s.lines.iter())
    }

    pub fn iter_chords(&self) -> impl Iterator<Item = &ChordToken> {
        self.iter_lines().flat_map(|line| line.chords.iter())
    }

    /// Find the first section carrying the given name
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.label() == name)
    }

    /// Rebuild the document with every line passed through `f`
    pub fn map_lines<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&LineBlock) -> LineBlock,
    {
        Self {
            sections: self
                .sections
                .iter()
                .map(|section| Section {
                    name: section.name.clone(),
                    implicit: section.implicit,
                    lines: section.lines.iter().map(&mut f).collect(),
                })
                .collect(),
            warnings: self.warnings.clone(),
        }
    }
}

impl fmt::Display for ParsedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Document({} sections, {} lines)",
            self.sections.len(),
            self.iter_lines().count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedDocument {
        ParsedDocument::with_sections(vec![
            Section::named("Verse").with_lines(vec![
                LineBlock::new(vec![ChordToken::new("C", 0)], "Amazing"),
                LineBlock::blank(),
            ]),
            Section::implicit().with_lines(vec![LineBlock::from_lyrics("Outro")]),
        ])
    }

    #[test]
    fn test_iterators() {
        let doc = sample();
        assert_eq!(doc.iter_sections().count(), 2);
        assert_eq!(doc.iter_lines().count(), 3);
        assert_eq!(doc.iter_chords().count(), 1);
        assert!(doc.section("Verse").is_some());
        assert!(doc.section("Chorus").is_none());
    }

    #[test]
    fn test_map_lines_leaves_source_untouched() {
        let doc = sample();
        let upper = doc.map_lines(|line| LineBlock::new(line.chords.clone(), line.lyrics.to_uppercase()));
        assert_eq!(upper.sections[0].lines[0].lyrics, "AMAZING");
        assert_eq!(doc.sections[0].lines[0].lyrics, "Amazing");
        assert!(upper.sections[1].implicit);
    }
}
