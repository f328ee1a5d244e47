//! Lexer module for chord sheets
//!
//! The lexer works on one physical line at a time. Section directives are
//! recognised by the parser on whole lines, so the only inline construct the
//! lexer has to understand is the chord marker: `[SYMBOL]`.
//!
//! Tokenization happens in two passes:
//! - [tokenize] / [tokenize_with_spans] run the logos lexer and classify the line
//!   into chord markers, stray brackets and braces, and plain text runs.
//! - [tokenize_line] folds those tokens into a [LineBlock](crate::chordsheet::ast::LineBlock):
//!   markers become chord tokens anchored at the char column where they sit in the
//!   marker-free lyric, everything else is concatenated into the lyric.
//!
//! Markers never take up width in the lyric. A marker that holds nothing but
//! whitespace (`[]`, `[ ]`) is consumed and dropped, so it neither shows up as a
//! chord nor leaves brackets behind.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_line, tokenize_with_spans};
pub use tokens::Token;
