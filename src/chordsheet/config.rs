//! Configuration loader for chordsheet.
//!
//! `defaults/chordsheet.default.toml` is embedded into the binary so the
//! documented defaults and runtime behavior stay in sync. Callers layer user
//! files and CLI overrides on top via [`Loader`] before deserializing into
//! [`ChordsheetConfig`].

use crate::chordsheet::layout::RenderOptions;
use crate::chordsheet::music::Accidentals;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/chordsheet.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct ChordsheetConfig {
    pub render: RenderConfig,
    pub transpose: TransposeConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub show_chords: bool,
    /// 0 disables wrapping
    pub wrap_width: usize,
}

impl RenderConfig {
    pub fn options(&self) -> RenderOptions {
        RenderOptions::new(
            self.show_chords,
            (self.wrap_width > 0).then_some(self.wrap_width),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransposeConfig {
    pub accidentals: AccidentalsMode,
}

/// Accidental spelling policy for transposed chords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccidentalsMode {
    /// Follow the target key
    Auto,
    Sharp,
    Flat,
}

impl AccidentalsMode {
    /// The forced spelling, or `None` when the key decides
    pub fn forced(self) -> Option<Accidentals> {
        match self {
            AccidentalsMode::Auto => None,
            AccidentalsMode::Sharp => Some(Accidentals::Sharps),
            AccidentalsMode::Flat => Some(Accidentals::Flats),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a configuration file that may be absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. from a CLI flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ChordsheetConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<ChordsheetConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.render.show_chords);
        assert_eq!(config.render.wrap_width, 40);
        assert_eq!(config.transpose.accidentals, AccidentalsMode::Auto);
        assert_eq!(config.output.format, "html");
        assert_eq!(config.render.options(), RenderOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("transpose.accidentals", "flat")
            .expect("override to apply")
            .set_override("render.wrap_width", 0i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.transpose.accidentals.forced(), Some(Accidentals::Flats));
        assert_eq!(config.render.options().wrap_width, None);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[render]\nshow_chords = false\n\n[output]\nformat = \"text\"").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert!(!config.render.show_chords);
        assert_eq!(config.render.wrap_width, 40);
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/chordsheet.toml")
            .build()
            .unwrap();
        assert_eq!(config.output.format, "html");
    }

    #[test]
    fn missing_required_file_fails() {
        assert!(Loader::new()
            .with_file("/nonexistent/chordsheet.toml")
            .build()
            .is_err());
    }

    #[test]
    fn rejects_unknown_accidentals() {
        let result = Loader::new()
            .set_override("transpose.accidentals", "double-sharp")
            .unwrap()
            .build();
        assert!(result.is_err());
    }
}
