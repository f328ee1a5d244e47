//! Line classification
//!
//! Directives must take up a whole line (surrounding whitespace aside) and are
//! matched case-insensitively:
//!
//! ```text
//! {start_of_section: NAME}
//! {start_of_section}
//! {end_of_section}
//! ```

use crate::chordsheet::ast::SectionName;
use once_cell::sync::Lazy;
use regex::Regex;

static SECTION_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\{start_of_section(?:\s*:([^{}]*))?\}$").expect("valid start pattern")
});

static SECTION_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\{end_of_section\}$").expect("valid end pattern"));

static CHORD_MARKER_ANYWHERE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\[\]]*\]").expect("valid chord pattern"));

static DIRECTIVE_ANYWHERE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\{(?:start_of_section(?:\s*:[^{}]*)?|end_of_section)\}")
        .expect("valid directive pattern")
});

/// What a single source line is, before any state is considered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    SectionStart(SectionName),
    SectionEnd,
    /// A brace that is not part of a directive
    MalformedDirective,
    Content(&'a str),
}

/// Classify a line on its own
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if let Some(captures) = SECTION_START.captures(trimmed) {
        let name = match captures.get(1) {
            Some(name) => SectionName::Named(name.as_str().trim().to_string()),
            None => SectionName::Anonymous,
        };
        return LineKind::SectionStart(name);
    }
    if SECTION_END.is_match(trimmed) {
        return LineKind::SectionEnd;
    }
    if trimmed.contains(&['{', '}'][..]) {
        return LineKind::MalformedDirective;
    }
    LineKind::Content(line)
}

/// Remove chord markers and section directives, keeping the lyric text
///
/// Used to feed plain text to a search index. Unlike the parser this never
/// fails: it strips what it recognises and leaves the rest alone.
pub fn strip_to_lyrics(source: &str) -> String {
    let without_chords = CHORD_MARKER_ANYWHERE.replace_all(source, "");
    DIRECTIVE_ANYWHERE
        .replace_all(&without_chords, "")
        .into_owned()
}
