//! Line block element definition

use super::traits::AstNode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A chord symbol anchored at a character column of the marker-stripped lyric
///
/// Columns count chars, not bytes. Transposition replaces the symbol and never
/// moves the column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChordToken {
    pub symbol: String,
    pub column: usize,
}

impl ChordToken {
    pub fn new(symbol: impl Into<String>, column: usize) -> Self {
        Self {
            symbol: symbol.into(),
            column,
        }
    }

    /// Same anchor, different symbol
    pub fn with_symbol(&self, symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            column: self.column,
        }
    }

    /// Number of character cells the symbol occupies once rendered
    pub fn width(&self) -> usize {
        self.symbol.chars().count()
    }
}

impl fmt::Display for ChordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.symbol, self.column)
    }
}

/// One physical line: its chords (left to right) and its plain lyric text
///
/// Symbols and columns are stored together, so the two views returned by
/// [LineBlock::symbols] and [LineBlock::columns] always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineBlock {
    pub chords: Vec<ChordToken>,
    pub lyrics: String,
}

impl LineBlock {
    pub fn new(chords: Vec<ChordToken>, lyrics: impl Into<String>) -> Self {
        Self {
            chords,
            lyrics: lyrics.into(),
        }
    }

    /// A blank separator line
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn from_lyrics(lyrics: impl Into<String>) -> Self {
        Self::new(Vec::new(), lyrics)
    }

    /// No lyric text and no chords
    pub fn is_blank(&self) -> bool {
        self.chords.is_empty() && self.lyrics.is_empty()
    }

    pub fn has_chords(&self) -> bool {
        !self.chords.is_empty()
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.chords.iter().map(|c| c.symbol.as_str()).collect()
    }

    pub fn columns(&self) -> Vec<usize> {
        self.chords.iter().map(|c| c.column).collect()
    }

    /// Length of the lyric in chars
    pub fn lyric_width(&self) -> usize {
        self.lyrics.chars().count()
    }

    /// Rebuild the line with every chord symbol passed through `f`
    pub fn map_symbols<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        Self {
            chords: self
                .chords
                .iter()
                .map(|c| c.with_symbol(f(&c.symbol)))
                .collect(),
            lyrics: self.lyrics.clone(),
        }
    }
}

impl AstNode for LineBlock {
    fn node_type(&self) -> &'static str {
        "Line"
    }
    fn display_label(&self) -> String {
        if self.is_blank() {
            return "<blank>".to_string();
        }
        if self.chords.is_empty() {
            return self.lyrics.clone();
        }
        format!("{} [{}]", self.lyrics, self.symbols().join(" "))
    }
}

impl fmt::Display for LineBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line('{}', {} chords)", self.lyrics, self.chords.len())
    }
}
