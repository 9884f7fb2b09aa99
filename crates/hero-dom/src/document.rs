//! Document - High-level document API

use crate::{DomError, DomResult, DomTree, Node, NodeId};

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a new document with an empty html/head/body skeleton
    pub fn new(url: &str) -> Self {
        let (html, head, body) = (NodeId(1), NodeId(2), NodeId(3));

        let mut root = Node::document();
        root.first_child = html;
        root.last_child = html;

        let mut html_node = Node::element("html");
        html_node.parent = NodeId::ROOT;
        html_node.first_child = head;
        html_node.last_child = body;

        let mut head_node = Node::element("head");
        head_node.parent = html;
        head_node.next_sibling = body;

        let mut body_node = Node::element("body");
        body_node.parent = html;
        body_node.prev_sibling = head;

        Self {
            tree: DomTree::from_linked(vec![root, html_node, head_node, body_node]),
            url: url.to_string(),
            body_element: body,
        }
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            body_element: NodeId::NONE,
        }
    }

    /// Locate the body element after the tree was built
    pub fn finalize(&mut self) {
        let tree = &self.tree;
        let named_child = |parent: NodeId, name: &str| {
            tree.element_children(parent)
                .find(|&id| tree.element(id).is_some_and(|e| e.name() == name))
                .unwrap_or(NodeId::NONE)
        };

        let html = named_child(tree.root(), "html");
        let body = if html.is_valid() {
            named_child(html, "body")
        } else {
            NodeId::NONE
        };

        if !body.is_valid() {
            tracing::trace!("Document {} has no body element", self.url);
        }
        self.body_element = body;
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Set an attribute on an element
    pub fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) -> DomResult<()> {
        let node = self.tree.get_mut(element).ok_or(DomError::NotFound(element))?;
        let elem = node.as_element_mut().ok_or(DomError::NotAnElement(element))?;
        elem.set_attr(name, value);
        Ok(())
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_skeleton() {
        let doc = Document::new("https://example.com/");
        let tree = doc.tree();
        let html = tree.first_element_child(tree.root()).unwrap();
        let names: Vec<_> = tree
            .element_children(html)
            .map(|id| tree.element(id).unwrap().name())
            .collect();

        assert_eq!(tree.element(html).unwrap().name(), "html");
        assert_eq!(names, ["head", "body"]);
        assert_eq!(tree.element(doc.body()).unwrap().name(), "body");
        assert_eq!(tree.get(doc.body()).unwrap().parent, html);
        assert_eq!(doc.url(), "https://example.com/");

        let order: Vec<_> = tree.descendants(tree.root()).map(|(id, _)| id).collect();
        assert_eq!(order.len(), 3);
        assert_eq!(order.last(), Some(&doc.body()));
    }

    #[test]
    fn test_skeleton_accepts_children() {
        let mut doc = Document::default();
        let body = doc.body();
        let img = doc.tree_mut().create_element("img").unwrap();
        doc.tree_mut().append_child(body, img).unwrap();

        assert_eq!(doc.tree().first_element_child(body), Some(img));
    }

    #[test]
    fn test_finalize_finds_body() {
        let mut doc = Document::empty("about:blank");
        assert!(!doc.body().is_valid());

        let tree = doc.tree_mut();
        let html = tree.create_element("html").unwrap();
        let body = tree.create_element("body").unwrap();
        tree.append_child(tree.root(), html).unwrap();
        tree.append_child(html, body).unwrap();
        doc.finalize();

        assert_eq!(doc.body(), body);
    }

    #[test]
    fn test_set_attribute() {
        let mut doc = Document::default();
        let div = doc.tree_mut().create_element("div").unwrap();
        let body = doc.body();
        doc.tree_mut().append_child(body, div).unwrap();
        doc.set_attribute(div, "id", "masthead").unwrap();

        assert_eq!(doc.tree().element(div).unwrap().id(), Some("masthead"));
        assert_eq!(
            doc.set_attribute(NodeId::ROOT, "id", "x"),
            Err(DomError::NotAnElement(NodeId::ROOT))
        );
        assert_eq!(
            doc.set_attribute(NodeId::NONE, "id", "x"),
            Err(DomError::NotFound(NodeId::NONE))
        );
    }
}
