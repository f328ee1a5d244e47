//! Format registry for chord sheet output
//!
//! Formats are pluggable: each implements [Formatter] and is registered with
//! [FormatRegistry] under its name.

use crate::chordsheet::ast::ParsedDocument;
use crate::chordsheet::layout::RenderOptions;
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// Trait for document formatters
pub trait Formatter: Send + Sync {
    /// The name this format is registered under (e.g. "html", "text")
    fn name(&self) -> &str;

    /// Render a document in this format
    ///
    /// Layout formats honour `options`; data formats ignore them.
    fn render(&self, doc: &ParsedDocument, options: &RenderOptions) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Registry of document formatters, keyed by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any previous one with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Render a document using the named format
    pub fn render(
        &self,
        doc: &ParsedDocument,
        format: &str,
        options: &RenderOptions,
    ) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.render(doc, options)
    }

    /// All registered format names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Registry holding every built-in format
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::HtmlFormatter);
        registry.register(super::TextFormatter);
        registry.register(super::TreevizFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
