//! Treeviz formatter for parsed chord sheets
//!
//! One line per node, nesting drawn with box connectors:
//!
//! ```text
//! ├─ Section: Verse
//! │ ├─ Line: Hello world [C G]
//! │ └─ Line: <blank>
//! └─ ImplicitSection: <anonymous>
//!   └─ Line: free line
//! ```
//!
//! Labels are truncated to 30 characters.

use super::registry::{FormatError, Formatter};
use crate::chordsheet::ast::{AstNode, ParsedDocument};
use crate::chordsheet::layout::RenderOptions;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(doc: &ParsedDocument) -> String {
    let mut result = String::new();
    let count = doc.sections.len();
    for (i, section) in doc.sections.iter().enumerate() {
        let is_last = i + 1 == count;
        append_node(&mut result, section, "", is_last);

        let prefix = if is_last { "  " } else { "│ " };
        let line_count = section.lines.len();
        for (j, line) in section.lines.iter().enumerate() {
            append_node(&mut result, line, prefix, j + 1 == line_count);
        }
    }
    result
}

fn append_node(result: &mut String, node: &dyn AstNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.node_type(),
        truncate(&node.display_label(), 30)
    ));
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn render(&self, doc: &ParsedDocument, _options: &RenderOptions) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn description(&self) -> &str {
        "Tree visualization of the parsed document"
    }
}
