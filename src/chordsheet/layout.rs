//! Two-row layout of chords over lyrics
//!
//! Every source line becomes a chord row and a lyric row. Chords keep the
//! column they were anchored at unless that would make them touch or overlap
//! the previous chord, in which case they are pushed right until exactly one
//! blank cell separates them. Long lyric lines can be wrapped at a fixed width;
//! chords travel with the lyric segment they were anchored in.
//!
//! The output of [render] is format-agnostic; [formats](crate::chordsheet::formats)
//! turns it into markup or plain text.

pub mod chord_row;
pub mod render;
pub mod wrap;

pub use chord_row::{build_chord_row, place_chords, PlacedChord};
pub use render::{render, RenderOptions, RenderedLine, RenderedSection, RenderedSong, DEFAULT_WRAP_WIDTH};
pub use wrap::wrap_line;
