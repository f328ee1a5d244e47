//! Chord row construction and collision resolution

use crate::chordsheet::ast::{ChordToken, LineBlock};

/// A chord symbol at its final column in the chord row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedChord<'a> {
    pub symbol: &'a str,
    pub start: usize,
}

impl PlacedChord<'_> {
    /// One past the last cell the symbol occupies
    pub fn end(&self) -> usize {
        self.start + self.symbol.chars().count()
    }
}

/// Resolve final columns, left to right
///
/// Chords are ordered by anchor column (stable, so chords sharing a column
/// keep their source order). Each one starts at its anchor or two cells past
/// the previous chord's last character, whichever is further right.
pub fn place_chords(chords: &[ChordToken]) -> Vec<PlacedChord<'_>> {
    let mut ordered: Vec<&ChordToken> = chords.iter().filter(|c| !c.symbol.is_empty()).collect();
    ordered.sort_by_key(|c| c.column);

    let mut placed: Vec<PlacedChord<'_>> = Vec::with_capacity(ordered.len());
    for chord in ordered {
        let start = match placed.last() {
            // previous end is exclusive, so +1 leaves one blank cell
            Some(previous) => chord.column.max(previous.end() + 1),
            None => chord.column,
        };
        placed.push(PlacedChord {
            symbol: &chord.symbol,
            start,
        });
    }
    placed
}

/// Lay the chords of a line out into a single row of text
///
/// The row is exactly as long as the right edge of the last chord; it is empty
/// when the line has no chords.
pub fn build_chord_row(line: &LineBlock) -> String {
    let placed = place_chords(&line.chords);
    let width = placed.iter().map(PlacedChord::end).max().unwrap_or(0);

    let mut cells = vec![' '; width];
    for chord in &placed {
        for (offset, character) in chord.symbol.chars().enumerate() {
            let index = chord.start + offset;
            if index >= cells.len() {
                cells.resize(index + 1, ' ');
            }
            cells[index] = character;
        }
    }
    cells.into_iter().collect()
}
