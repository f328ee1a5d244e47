//! Plain text output
//!
//! Chord rows sit directly above their lyric rows. A named section opens with a
//! `[Name]` line and sections are separated by one blank line.

use super::registry::{FormatError, Formatter};
use crate::chordsheet::ast::ParsedDocument;
use crate::chordsheet::layout::{render, RenderOptions, RenderedSection, RenderedSong};

pub fn render_text(song: &RenderedSong) -> String {
    song.sections
        .iter()
        .map(section_text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn section_text(section: &RenderedSection) -> String {
    let mut out = String::new();
    if let Some(header) = &section.header {
        out.push_str(&format!("[{header}]\n"));
    }
    for line in &section.lines {
        if let Some(chords) = &line.chords {
            out.push_str(chords);
            out.push('\n');
        }
        out.push_str(&line.lyrics);
        out.push('\n');
    }
    out
}

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn render(&self, doc: &ParsedDocument, options: &RenderOptions) -> Result<String, FormatError> {
        Ok(render_text(&render(doc, options)))
    }

    fn description(&self) -> &str {
        "Plain text with chord rows over lyric rows"
    }
}
