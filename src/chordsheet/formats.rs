//! Output format implementations for parsed chord sheets
//!
//! Each format implements [Formatter] and is looked up by name through
//! [FormatRegistry]:
//! - `html`: the monospace markup embedded in song pages
//! - `text`: plain chord and lyric rows for terminals
//! - `treeviz`: a one-line-per-node view of the parsed document
//! - `json` / `yaml`: the parsed document itself

pub mod data;
pub mod html;
pub mod registry;
pub mod text;
pub mod treeviz;

pub use data::{JsonFormatter, YamlFormatter};
pub use html::{escape_html, render_html, HtmlFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use text::{render_text, TextFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
