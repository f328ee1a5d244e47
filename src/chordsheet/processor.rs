//! File processing API
//!
//! Runs the full pipeline over one chord sheet: parse, transpose, then render
//! through a named format from the [FormatRegistry].
//!
//! ```rust,ignore
//! use chordsheet::chordsheet::processor::{process_file, ProcessingOptions};
//!
//! let options = ProcessingOptions::new("text").transpose(Some("G"), Some("A"));
//! let output = process_file("song.cho", &options)?;
//! ```

use crate::chordsheet::config::ChordsheetConfig;
use crate::chordsheet::formats::{FormatError, FormatRegistry};
use crate::chordsheet::layout::RenderOptions;
use crate::chordsheet::music::{Accidentals, Transposition};
use crate::chordsheet::parser::{parse_document, ParseError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything that decides how a sheet is turned into output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingOptions {
    pub format: String,
    pub from_key: Option<String>,
    pub to_key: Option<String>,
    /// Forced spelling; `None` lets the keys decide
    pub accidentals: Option<Accidentals>,
    pub render: RenderOptions,
}

impl ProcessingOptions {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            from_key: None,
            to_key: None,
            accidentals: None,
            render: RenderOptions::default(),
        }
    }

    /// Options as configured, with no transposition
    pub fn from_config(config: &ChordsheetConfig) -> Self {
        Self {
            format: config.output.format.clone(),
            from_key: None,
            to_key: None,
            accidentals: config.transpose.accidentals.forced(),
            render: config.render.options(),
        }
    }

    pub fn transpose(mut self, from_key: Option<&str>, to_key: Option<&str>) -> Self {
        self.from_key = from_key.map(str::to_string);
        self.to_key = to_key.map(str::to_string);
        self
    }

    pub fn with_render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    pub fn transposition(&self) -> Transposition {
        let transposition =
            Transposition::between(self.from_key.as_deref(), self.to_key.as_deref());
        match self.accidentals {
            Some(accidentals) => transposition.with_accidentals(accidentals),
            None => transposition,
        }
    }
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self::new("html")
    }
}

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Run the pipeline over in-memory source text
pub fn process_source(source: &str, options: &ProcessingOptions) -> Result<String, ProcessingError> {
    let registry = FormatRegistry::with_defaults();
    if !registry.has(&options.format) {
        return Err(FormatError::FormatNotFound(options.format.clone()).into());
    }

    let doc = parse_document(source)?;
    let doc = options.transposition().apply(&doc);
    Ok(registry.render(&doc, &options.format, &options.render)?)
}

/// Read a chord sheet from disk and run the pipeline over it
pub fn process_file<P: AsRef<Path>>(
    path: P,
    options: &ProcessingOptions,
) -> Result<String, ProcessingError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ProcessingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), format = %options.format, "processing file");
    process_source(&source, options)
}
