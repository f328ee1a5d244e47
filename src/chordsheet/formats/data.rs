//! Structured data output: the parsed document as JSON or YAML

use super::registry::{FormatError, Formatter};
use crate::chordsheet::ast::ParsedDocument;
use crate::chordsheet::layout::RenderOptions;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn render(&self, doc: &ParsedDocument, _options: &RenderOptions) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Parsed document as pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn render(&self, doc: &ParsedDocument, _options: &RenderOptions) -> Result<String, FormatError> {
        serde_yaml::to_string(doc).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Parsed document as YAML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chordsheet::parser::parse_document;

    const SOURCE: &str = "{start_of_section: Verse}\n[Am]Hello\n{end_of_section}";

    #[test]
    fn test_json_round_trips() {
        let doc = parse_document(SOURCE).unwrap();
        let json = JsonFormatter.render(&doc, &RenderOptions::default()).unwrap();
        let back: ParsedDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_json_shape() {
        let doc = parse_document(SOURCE).unwrap();
        let json = JsonFormatter.render(&doc, &RenderOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sections"][0]["name"]["named"], "Verse");
        assert_eq!(value["sections"][0]["lines"][0]["chords"][0]["symbol"], "Am");
        assert_eq!(value["sections"][0]["lines"][0]["lyrics"], "Hello");
    }

    #[test]
    fn test_yaml_round_trips() {
        let doc = parse_document(SOURCE).unwrap();
        let yaml = YamlFormatter.render(&doc, &RenderOptions::default()).unwrap();
        assert!(yaml.contains("lyrics: Hello"));
        let back: ParsedDocument = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, doc);
    }
}
