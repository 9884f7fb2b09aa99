//! HTML Serialization (innerHTML/outerHTML)
//!
//! Writes a tree back out following the HTML fragment serialization rules:
//! - void elements get no end tag
//! - raw-text elements are written unescaped
//! - every attribute is written as `name="value"`, empty values included

use hero_dom::{Document, DomTree, NodeData, NodeId};

/// HTML serializer
#[derive(Debug, Default)]
pub struct HtmlSerializer;

/// Void elements (no end tag)
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr",
    "img", "input", "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Raw text elements (no escaping for content)
///
/// `noscript` is raw because html5ever parses with scripting enabled, which
/// leaves its content as a single text node.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "noscript", "plaintext",
];

impl HtmlSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Serialize a whole document
    pub fn serialize_document(&self, document: &Document) -> String {
        let tree = document.tree();
        self.serialize_inner(tree, tree.root()).unwrap_or_default()
    }

    /// Serialize innerHTML of a node (children only)
    pub fn serialize_inner(&self, tree: &DomTree, node_id: NodeId) -> Option<String> {
        tree.get(node_id)?;
        let mut output = String::new();
        self.serialize_children(tree, node_id, &mut output);
        Some(output)
    }

    /// Serialize outerHTML of a node (including the node itself)
    pub fn serialize_outer(&self, tree: &DomTree, node_id: NodeId) -> Option<String> {
        tree.get(node_id)?;
        let mut output = String::new();
        self.serialize_node(tree, node_id, &mut output);
        Some(output)
    }

    fn serialize_node(&self, tree: &DomTree, node_id: NodeId, output: &mut String) {
        let Some(node) = tree.get(node_id) else {
            return;
        };

        match &node.data {
            NodeData::Document => {
                self.serialize_children(tree, node_id, output);
            }
            NodeData::Element(elem) => {
                let tag = elem.name();

                output.push('<');
                output.push_str(tag);
                for attr in elem.attrs() {
                    output.push(' ');
                    output.push_str(&attr.name);
                    output.push_str("=\"");
                    escape_attribute(&attr.value, output);
                    output.push('"');
                }
                output.push('>');

                if VOID_ELEMENTS.contains(&tag) {
                    return;
                }

                if RAW_TEXT_ELEMENTS.contains(&tag) {
                    self.serialize_children_raw(tree, node_id, output);
                } else {
                    self.serialize_children(tree, node_id, output);
                }

                output.push_str("</");
                output.push_str(tag);
                output.push('>');
            }
            NodeData::Text(text) => {
                escape_text(text, output);
            }
            NodeData::Comment(text) => {
                output.push_str("<!--");
                output.push_str(text);
                output.push_str("-->");
            }
            NodeData::Doctype { name, .. } => {
                output.push_str("<!DOCTYPE ");
                output.push_str(name);
                output.push('>');
            }
        }
    }

    fn serialize_children(&self, tree: &DomTree, parent_id: NodeId, output: &mut String) {
        for (child_id, _) in tree.children(parent_id) {
            self.serialize_node(tree, child_id, output);
        }
    }

    fn serialize_children_raw(&self, tree: &DomTree, parent_id: NodeId, output: &mut String) {
        for (child_id, child) in tree.children(parent_id) {
            match child.as_text() {
                Some(text) => output.push_str(text),
                None => self.serialize_node(tree, child_id, output),
            }
        }
    }
}

/// Escape text content for HTML
fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '\u{00A0}' => output.push_str("&nbsp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

/// Escape attribute value
fn escape_attribute(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '\u{00A0}' => output.push_str("&nbsp;"),
            '"' => output.push_str("&quot;"),
            _ => output.push(c),
        }
    }
}

/// Utility: serialize a whole document
pub fn serialize(document: &Document) -> String {
    HtmlSerializer::new().serialize_document(document)
}

/// Utility: get outerHTML of a node (`None` for an unknown node)
pub fn outer_html(tree: &DomTree, node_id: NodeId) -> Option<String> {
    HtmlSerializer::new().serialize_outer(tree, node_id)
}

/// Utility: get innerHTML of a node (`None` for an unknown node)
pub fn inner_html(tree: &DomTree, node_id: NodeId) -> Option<String> {
    HtmlSerializer::new().serialize_inner(tree, node_id)
}
