//! AST traits - Common interfaces for uniform node access

/// Common interface for all document nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}
