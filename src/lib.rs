//! # chordsheet
//!
//! A parser, transposer and renderer for chord-annotated lyric sheets.
//!
//! Lyric sheets carry inline chord markers (`[G#m7]`) and section directives
//! (`{start_of_section: Verse}` / `{end_of_section}`). The library turns that text
//! into a [`ParsedDocument`](chordsheet::ast::ParsedDocument), shifts chords between
//! keys, and lays chords out above wrapped lyric lines with column alignment intact.
//!
//! ## Testing
//!
//! Document-shape assertions live in the [testing module](chordsheet::testing).

pub mod chordsheet;
