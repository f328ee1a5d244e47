//! Document layout: sections of chord/lyric row pairs

use crate::chordsheet::ast::{LineBlock, ParsedDocument, Section};
use crate::chordsheet::layout::chord_row::build_chord_row;
use crate::chordsheet::layout::wrap::wrap_line;
use serde::{Deserialize, Serialize};

/// Wrap width used when none is configured
pub const DEFAULT_WRAP_WIDTH: usize = 40;

/// Knobs for [render]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub show_chords: bool,
    /// `None` (or `Some(0)`) keeps lines at their full length
    pub wrap_width: Option<usize>,
}

impl RenderOptions {
    pub fn new(show_chords: bool, wrap_width: Option<usize>) -> Self {
        Self {
            show_chords,
            wrap_width,
        }
    }

    pub fn without_wrapping(mut self) -> Self {
        self.wrap_width = None;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_chords: true,
            wrap_width: Some(DEFAULT_WRAP_WIDTH),
        }
    }
}

/// One printable line pair; the lyric row is always present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedLine {
    pub chords: Option<String>,
    pub lyrics: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSection {
    /// Present only for sections with a non-empty name
    pub header: Option<String>,
    pub lines: Vec<RenderedLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSong {
    pub sections: Vec<RenderedSection>,
}

impl RenderedSong {
    pub fn iter_lines(&self) -> impl Iterator<Item = &RenderedLine> {
        self.sections.iter().flat_map(|s| s.lines.iter())
    }
}

/// Lay a parsed document out for display
pub fn render(doc: &ParsedDocument, options: &RenderOptions) -> RenderedSong {
    RenderedSong {
        sections: doc
            .sections
            .iter()
            .map(|section| render_section(section, options))
            .collect(),
    }
}

fn render_section(section: &Section, options: &RenderOptions) -> RenderedSection {
    let header = section
        .name
        .is_visible()
        .then(|| section.label().to_string());
    let width = options.wrap_width.unwrap_or(0);

    let lines = section
        .lines
        .iter()
        .flat_map(|line| wrap_line(line, width))
        .map(|line| render_line(&line, options.show_chords))
        .collect();

    RenderedSection { header, lines }
}

fn render_line(line: &LineBlock, show_chords: bool) -> RenderedLine {
    let chords = if show_chords && line.has_chords() {
        Some(build_chord_row(line)).filter(|row| !row.is_empty())
    } else {
        None
    };
    RenderedLine {
        chords,
        lyrics: line.lyrics.clone(),
    }
}
