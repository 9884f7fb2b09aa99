//! Hero HTML
//!
//! HTML5 parsing into a [`hero_dom::Document`] (via html5ever) and
//! serialization back to markup.

mod parser;
mod serializer;

pub use hero_dom::Document;
pub use parser::HtmlParser;
pub use serializer::{HtmlSerializer, inner_html, outer_html, serialize};

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed tree: {0}")]
    Tree(#[from] hero_dom::DomError),
}
