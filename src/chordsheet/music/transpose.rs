//! Whole-document transposition
//!
//! A [Transposition] is a pure transform: it builds new line blocks and leaves
//! the source document untouched, so a parsed document can be rendered in
//! several keys without re-parsing.

use crate::chordsheet::ast::{LineBlock, ParsedDocument};
use crate::chordsheet::music::chord::transpose_chord;
use crate::chordsheet::music::key::{prefer_sharps, semitone_interval, Key};
use crate::chordsheet::music::pitch::Accidentals;

/// How to move every chord of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transposition {
    /// Semitones up, in 0..12
    pub interval: u8,
    pub accidentals: Accidentals,
}

impl Transposition {
    pub fn new(interval: i32, accidentals: Accidentals) -> Self {
        Self {
            interval: interval.rem_euclid(12) as u8,
            accidentals,
        }
    }

    /// No movement, sharp spelling
    pub fn identity() -> Self {
        Self::new(0, Accidentals::Sharps)
    }

    /// Move from the song's key to the requested one
    ///
    /// The accidental preference follows the target key, or the source key
    /// when no readable target is given, so an untransposed song keeps its own
    /// flavour. Empty and unreadable key names count as absent.
    pub fn between(from_key: Option<&str>, to_key: Option<&str>) -> Self {
        let from_key = from_key.filter(|k| Key::parse(k).is_some());
        let to_key = to_key.filter(|k| Key::parse(k).is_some());
        let interval = semitone_interval(from_key, to_key);
        let sharps = prefer_sharps(to_key.or(from_key));
        tracing::debug!(?from_key, ?to_key, interval, sharps, "resolved transposition");
        Self {
            interval,
            accidentals: Accidentals::from_prefer_sharps(sharps),
        }
    }

    /// Override the key-derived accidental preference
    pub fn with_accidentals(mut self, accidentals: Accidentals) -> Self {
        self.accidentals = accidentals;
        self
    }

    pub fn prefer_sharps(&self) -> bool {
        self.accidentals.prefers_sharps()
    }

    pub fn chord(&self, symbol: &str) -> String {
        transpose_chord(symbol, i32::from(self.interval), self.prefer_sharps())
    }

    pub fn line(&self, line: &LineBlock) -> LineBlock {
        line.map_symbols(|symbol| self.chord(symbol))
    }

    /// Transpose every chord of `doc`; columns and lyrics are unchanged
    pub fn apply(&self, doc: &ParsedDocument) -> ParsedDocument {
        doc.map_lines(|line| self.line(line))
    }
}

impl Default for Transposition {
    fn default() -> Self {
        Self::identity()
    }
}

/// Transpose a document from one key to another
pub fn transpose_document(
    doc: &ParsedDocument,
    from_key: Option<&str>,
    to_key: Option<&str>,
) -> ParsedDocument {
    Transposition::between(from_key, to_key).apply(doc)
}
