//! Implementation of the line lexer
//!
//! Classification is handled entirely by logos; this module turns the token
//! stream into chord tokens and lyric text.

use crate::chordsheet::ast::{ChordToken, LineBlock};
use crate::chordsheet::lexer::tokens::Token;
use logos::Logos;

/// Tokenize a line and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Tokenize a line and collect tokens with their byte spans
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

/// Split one line into its chords and its marker-free lyric
///
/// Each chord is anchored at the char column it occupies in the returned lyric,
/// i.e. after all earlier markers have been removed. Stray brackets and braces
/// are kept in the lyric as plain text; rejecting them is the parser's call.
pub fn tokenize_line(line: &str) -> LineBlock {
    let mut chords = Vec::new();
    let mut lyrics = String::with_capacity(line.len());
    let mut column = 0;

    for (token, span) in tokenize_with_spans(line) {
        let slice = &line[span];
        match token {
            Token::ChordMarker => {
                let symbol = slice[1..slice.len() - 1].trim();
                if !symbol.is_empty() {
                    chords.push(ChordToken::new(symbol, column));
                }
            }
            _ => {
                lyrics.push_str(slice);
                column += slice.chars().count();
            }
        }
    }

    LineBlock::new(chords, lyrics)
}
