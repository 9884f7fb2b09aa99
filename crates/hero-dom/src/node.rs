//! DOM Node
//!
//! Nodes link to their relatives by [`NodeId`] instead of pointers, so the
//! whole tree lives in one arena and is dropped at once.

use crate::NodeId;

/// DOM Node - Core structure
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (NONE if root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn detached(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(name: &str) -> Self {
        Self::detached(NodeData::Element(ElementData::new(name)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::detached(NodeData::Text(content.into()))
    }

    /// Create a new comment node
    pub fn comment(content: impl Into<String>) -> Self {
        Self::detached(NodeData::Comment(content.into()))
    }

    /// Create a DOCTYPE node
    pub fn doctype(name: impl Into<String>, public_id: impl Into<String>, system_id: impl Into<String>) -> Self {
        Self::detached(NodeData::Doctype {
            name: name.into(),
            public_id: public_id.into(),
            system_id: system_id.into(),
        })
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::detached(NodeData::Document)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root
    Document,
    /// DOCTYPE
    Doctype {
        name: String,
        public_id: String,
        system_id: String,
    },
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Element-specific data
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Tag name as produced by the parser (HTML names are lowercase)
    name: String,
    /// Attributes in source order
    attrs: Vec<Attribute>,
    /// Class tokens, kept in sync with the `class` attribute
    classes: Vec<String>,
}

impl ElementData {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attrs: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Tag name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in source order
    pub fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }

    /// Class tokens in source order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Check for a whitespace-separated class token
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Get the `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Check if attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Set an attribute, keeping its position if it already exists
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if name == "class" {
            self.classes = value.split_ascii_whitespace().map(str::to_string).collect();
        }

        if let Some(attr) = self.attrs.iter_mut().find(|a| a.name == name) {
            attr.value = value;
            return;
        }
        self.attrs.push(Attribute {
            name: name.to_string(),
            value,
        });
    }
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_tokens_follow_attribute() {
        let mut elem = ElementData::new("img");
        elem.set_attr("class", "  attachment-post-thumbnail\twp-post-image ");

        assert_eq!(elem.name(), "img");
        assert!(elem.has_class("wp-post-image"));
        assert!(!elem.has_class("wp-post"));

        elem.set_attr("class", "custom-logo");
        assert!(!elem.has_class("wp-post-image"));
        assert!(elem.has_class("custom-logo"));

        elem.set_attr("class", "");
        assert!(elem.classes().is_empty());
    }

    #[test]
    fn test_set_attr_keeps_position() {
        let mut elem = ElementData::new("img");
        elem.set_attr("src", "a.jpg");
        elem.set_attr("alt", "");
        elem.set_attr("src", "b.jpg");

        let names: Vec<_> = elem.attrs().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["src", "alt"]);
        assert_eq!(elem.get_attr("src"), Some("b.jpg"));
        assert!(elem.has_attr("alt"));
    }
}
