//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it to the arena tree.
//! Every text node is kept, whitespace included, so serializing an untouched
//! document reproduces its structure.

use hero_dom::{Document, DomTree, Node, NodeId};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::ParseError;

/// HTML5 parser
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a base URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<Document, ParseError> {
        tracing::debug!("Parsing HTML document: {}", url);

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut document = Document::empty(url);
        let root = document.tree().root();
        self.convert_node(&dom.document, document.tree_mut(), root)?;

        // Find html, head, body elements
        document.finalize();

        tracing::debug!("Parsed {} nodes", document.tree().len());
        Ok(document)
    }

    /// Convert an RcDom node (and its subtree) into `tree` under `parent`
    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) -> Result<(), ParseError> {
        match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, parent)?;
                }
            }
            RcNodeData::Doctype { name, public_id, system_id } => {
                let id = tree.push(Node::doctype(name.to_string(), public_id.to_string(), system_id.to_string()))?;
                tree.append_child(parent, id)?;
            }
            RcNodeData::Text { contents } => {
                let id = tree.create_text(&contents.borrow())?;
                tree.append_child(parent, id)?;
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(contents)?;
                tree.append_child(parent, id)?;
            }
            RcNodeData::Element { name, attrs, template_contents, .. } => {
                let id = tree.create_element(&name.local)?;

                if let Some(elem) = tree.element_mut(id) {
                    for attr in attrs.borrow().iter() {
                        let attr_name = match &attr.name.prefix {
                            Some(prefix) => format!("{}:{}", prefix, attr.name.local),
                            None => attr.name.local.to_string(),
                        };
                        elem.set_attr(&attr_name, attr.value.to_string());
                    }
                }
                tree.append_child(parent, id)?;

                // <template> keeps its content in a separate fragment
                if let Some(contents) = template_contents.borrow().as_ref() {
                    for child in contents.children.borrow().iter() {
                        self.convert_node(child, tree, id)?;
                    }
                }
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, id)?;
                }
            }
            RcNodeData::ProcessingInstruction { .. } => {
                // Not produced by the HTML parser
            }
        }
        Ok(())
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
        let doc = HtmlParser::new().parse(html).unwrap();

        assert!(doc.tree().len() > 1, "Expected more than 1 node, got {}", doc.tree().len());
        let p = doc.tree().first_element_child(doc.body()).unwrap();
        let text = doc.tree().children(p).find_map(|(_, node)| node.as_text());
        assert_eq!(text, Some("Hello"));
    }

    #[test]
    fn test_parse_with_url() {
        let doc = HtmlParser::new()
            .parse_with_url("<p>x</p>", "https://example.com/post/")
            .unwrap();
        assert_eq!(doc.url(), "https://example.com/post/");
        assert_eq!(HtmlParser::new().parse("").unwrap().url(), "about:blank");
    }

    #[test]
    fn test_parse_fragment() {
        let html = "<div><span>Text</span></div>";
        let doc = HtmlParser::new().parse(html).unwrap();

        // Even fragments get wrapped in html/head/body by html5ever
        assert!(doc.body().is_valid());
        let first = doc.tree().first_element_child(doc.body()).unwrap();
        assert_eq!(doc.tree().element(first).unwrap().name(), "div");
    }

    #[test]
    fn test_parse_keeps_attributes_and_classes() {
        let html = r#"<img class="wp-post-image  size-large" src="a.jpg" data-hero>"#;
        let doc = HtmlParser::new().parse(html).unwrap();

        let img = doc.tree().first_element_child(doc.body()).unwrap();
        let elem = doc.tree().element(img).unwrap();
        assert!(elem.has_class("wp-post-image"));
        assert!(elem.has_class("size-large"));
        assert_eq!(elem.get_attr("src"), Some("a.jpg"));
        assert_eq!(elem.get_attr("data-hero"), Some(""));
    }
}
