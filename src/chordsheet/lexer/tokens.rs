//! Token definitions for a single chord sheet line
//!
//! Defined with the logos derive macro. Every character of a line belongs to
//! exactly one token, so the lexer never produces errors.
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible tokens within one line
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum Token {
    // `[G#m7]`, `[B/F#]`, `[ ]` - anything up to the first closing bracket
    #[regex(r"\[[^\[\]]*\]")]
    ChordMarker,

    // Brackets that are not part of a complete marker
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,

    // Braces only belong to directives, which take a whole line
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    // Lyric text (catch-all)
    #[regex(r"[^\[\]\{\}]+")]
    Text,
}

impl Token {
    pub fn is_chord_marker(&self) -> bool {
        matches!(self, Token::ChordMarker)
    }

    /// A bracket that did not close into a marker
    pub fn is_stray_bracket(&self) -> bool {
        matches!(self, Token::OpenBracket | Token::CloseBracket)
    }

    pub fn is_brace(&self) -> bool {
        matches!(self, Token::OpenBrace | Token::CloseBrace)
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Token::ChordMarker => "<chord>",
            Token::OpenBracket => "<[>",
            Token::CloseBracket => "<]>",
            Token::OpenBrace => "<{>",
            Token::CloseBrace => "<}>",
            Token::Text => "<text>",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token> {
        Token::lexer(source).filter_map(|t| t.ok()).collect()
    }

    #[test]
    fn test_chord_marker() {
        let mut lexer = Token::lexer("[G#m7]");
        assert_eq!(lexer.next(), Some(Ok(Token::ChordMarker)));
        assert_eq!(lexer.slice(), "[G#m7]");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_empty_marker_is_still_a_marker() {
        assert_eq!(lex_all("[]"), vec![Token::ChordMarker]);
        assert_eq!(lex_all("[  ]"), vec![Token::ChordMarker]);
    }

    #[test]
    fn test_unclosed_bracket_falls_back_to_stray_token() {
        assert_eq!(
            lex_all("la [C la"),
            vec![Token::Text, Token::OpenBracket, Token::Text]
        );
        assert_eq!(lex_all("la] la"), vec![Token::Text, Token::CloseBracket, Token::Text]);
    }

    #[test]
    fn test_double_open_bracket() {
        // The first bracket cannot start a marker because another one follows
        assert_eq!(lex_all("[[C]"), vec![Token::OpenBracket, Token::ChordMarker]);
    }

    #[test]
    fn test_braces() {
        assert_eq!(
            lex_all("{new_page}"),
            vec![Token::OpenBrace, Token::Text, Token::CloseBrace]
        );
    }

    #[test]
    fn test_mixed_line() {
        assert_eq!(
            lex_all("[C]Amazing gr[G]ace"),
            vec![
                Token::ChordMarker,
                Token::Text,
                Token::ChordMarker,
                Token::Text
            ]
        );
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::ChordMarker.is_chord_marker());
        assert!(Token::OpenBracket.is_stray_bracket());
        assert!(Token::CloseBracket.is_stray_bracket());
        assert!(!Token::ChordMarker.is_stray_bracket());
        assert!(Token::OpenBrace.is_brace());
        assert!(Token::Text.is_text());
    }
}
