//! Access to the vetted chord sheets under `tests/fixtures/`

use std::fs;
use std::io;
use std::path::PathBuf;

/// Loader for sample chord sheets
pub struct Samples;

impl Samples {
    /// Directory holding the sample files
    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
    }

    /// Read a sample by file name, e.g. `"verse-chorus.cho"`
    pub fn get_string(name: &str) -> Result<String, io::Error> {
        fs::read_to_string(Self::dir().join(name))
    }

    /// All sample file names, sorted
    pub fn list() -> Result<Vec<String>, io::Error> {
        let mut names = Vec::new();
        for entry in fs::read_dir(Self::dir())? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "cho") {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}
