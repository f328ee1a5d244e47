//! HTML output
//!
//! Every section becomes a `<section class="song-section">`; inside it an
//! optional `<h3 class="section-header">` is followed by `<pre>` pairs, one
//! `chords` row (omitted when empty) over one `lyrics` row. Elements are
//! concatenated without separators so whitespace in `<pre>` stays exact.

use super::registry::{FormatError, Formatter};
use crate::chordsheet::ast::ParsedDocument;
use crate::chordsheet::layout::{render, RenderOptions, RenderedSong};

/// Neutralise the characters that are special in HTML text and attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render a laid-out song as HTML
pub fn render_html(song: &RenderedSong) -> String {
    let mut out = String::new();
    for section in &song.sections {
        out.push_str(r#"<section class="song-section">"#);
        if let Some(header) = &section.header {
            out.push_str(&format!(
                r#"<h3 class="section-header">{}</h3>"#,
                escape_html(header)
            ));
        }
        for line in &section.lines {
            if let Some(chords) = &line.chords {
                out.push_str(&format!(r#"<pre class="chords">{}</pre>"#, escape_html(chords)));
            }
            out.push_str(&format!(
                r#"<pre class="lyrics">{}</pre>"#,
                escape_html(&line.lyrics)
            ));
        }
        out.push_str("</section>");
    }
    out
}

pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn render(&self, doc: &ParsedDocument, options: &RenderOptions) -> Result<String, FormatError> {
        Ok(render_html(&render(doc, options)))
    }

    fn description(&self) -> &str {
        "Monospace HTML markup with chord rows over lyric rows"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chordsheet::ast::{ChordToken, LineBlock, Section};
    use crate::chordsheet::parser::parse_document;
    use rstest::rstest;

    fn html(source: &str, options: RenderOptions) -> String {
        let doc = parse_document(source).unwrap();
        HtmlFormatter.render(&doc, &options).unwrap()
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case("a & b", "a &amp; b")]
    #[case("<b>", "&lt;b&gt;")]
    #[case(r#"say "hi""#, "say &quot;hi&quot;")]
    #[case("it's", "it&#x27;s")]
    #[case("Пісня", "Пісня")]
    fn test_escape_html(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_html(input), expected);
    }

    #[test]
    fn test_named_section_markup() {
        let out = html(
            "{start_of_section: Verse}\n[C]Hello [G]world\n{end_of_section}",
            RenderOptions::default(),
        );
        insta::assert_snapshot!(out, @r#"<section class="song-section"><h3 class="section-header">Verse</h3><pre class="chords">C     G</pre><pre class="lyrics">Hello world</pre></section>"#);
    }

    #[test]
    fn test_hidden_chords_drop_chord_rows() {
        let out = html(
            "{start_of_section: Verse}\n[C]Hello [G]world\n{end_of_section}",
            RenderOptions::new(false, Some(40)),
        );
        assert!(!out.contains(r#"<pre class="chords">"#));
        assert!(out.contains(r#"<pre class="lyrics">Hello world</pre>"#));
    }

    #[test]
    fn test_anonymous_section_has_no_header() {
        let out = html("just words", RenderOptions::default());
        assert_eq!(
            out,
            r#"<section class="song-section"><pre class="lyrics">just words</pre></section>"#
        );
    }

    #[test]
    fn test_header_and_lyrics_are_escaped() {
        let out = html(
            "{start_of_section: <Intro>}\nrock & roll\n{end_of_section}",
            RenderOptions::default(),
        );
        assert!(out.contains(r#"<h3 class="section-header">&lt;Intro&gt;</h3>"#));
        assert!(out.contains(r#"<pre class="lyrics">rock &amp; roll</pre>"#));
    }

    #[test]
    fn test_chord_row_is_escaped() {
        let doc = ParsedDocument::with_sections(vec![Section::named("Verse")
            .with_lines(vec![LineBlock::new(vec![ChordToken::new("<b>&", 0)], "la")])]);
        let out = HtmlFormatter.render(&doc, &RenderOptions::default()).unwrap();
        assert!(out.contains(r#"<pre class="chords">&lt;b&gt;&amp;</pre>"#));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(html("", RenderOptions::default()), "");
    }
}
