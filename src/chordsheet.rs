//! Main module for chordsheet library functionality
//!
//! Data flows strictly left to right:
//!
//! ```text
//! raw text -> lexer -> parser -> ParsedDocument -> music (transpose) -> layout -> formats
//! ```
//!
//! Every stage is a pure function of its input. Nothing here performs I/O except
//! [processor::process_file] and the configuration [config::Loader].

pub mod ast;
pub mod config;
pub mod formats;
pub mod layout;
pub mod lexer;
pub mod music;
pub mod parser;
pub mod processor;
pub mod setlist;
pub mod song;
pub mod testing;
