//! Document model for parsed chord sheets
//!
//! A [ParsedDocument] owns an ordered list of [Section]s, each owning its
//! [LineBlock]s by value. Sections never nest. Nothing in the model is shared
//! between documents, and a document is rebuilt from source text for every render.
//!
//! ## Modules
//!
//! - `line_block` - [ChordToken] and [LineBlock], one physical line after marker extraction
//! - `section` - [Section] and its [SectionName]
//! - `document` - [ParsedDocument], the parser's output
//! - `traits` - [AstNode], uniform labelling used by the tree printer

pub mod document;
pub mod line_block;
pub mod section;
pub mod traits;

pub use document::ParsedDocument;
pub use line_block::{ChordToken, LineBlock};
pub use section::{Section, SectionName};
pub use traits::AstNode;
