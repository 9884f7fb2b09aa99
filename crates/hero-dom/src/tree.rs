//! DOM Tree (arena-based allocation)

use crate::{DomError, DomResult, ElementData, Node, NodeData, NodeId};

/// Arena-based DOM tree
///
/// Slot 0 always holds the document node. Nodes are never freed individually;
/// the whole arena is dropped with the tree.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// Wrap nodes whose links are already consistent; slot 0 must be the
    /// document node
    pub(crate) fn from_linked(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Get element data for a node
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    /// Get mutable element data for a node
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(Node::as_element_mut)
    }

    /// Number of nodes in the tree (including the document node)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when only the document node exists
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Add a detached node to the arena
    ///
    /// Fails once every id below `NodeId::NONE` is taken.
    pub fn push(&mut self, node: Node) -> DomResult<NodeId> {
        let id = slot_id(self.nodes.len())?;
        self.nodes.push(node);
        Ok(id)
    }

    /// Create a detached element
    pub fn create_element(&mut self, name: &str) -> DomResult<NodeId> {
        self.push(Node::element(name))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> DomResult<NodeId> {
        self.push(Node::text(content))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> DomResult<NodeId> {
        self.push(Node::comment(content))
    }

    /// Append a detached node as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        let parent_node = self.get(parent).ok_or(DomError::NotFound(parent))?;
        if matches!(
            parent_node.data,
            NodeData::Text(_) | NodeData::Comment(_) | NodeData::Doctype { .. }
        ) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        let child_node = self.get(child).ok_or(DomError::NotFound(child))?;
        if child_node.parent.is_valid() || child == NodeId::ROOT || self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.link_last(parent, child);
        Ok(())
    }

    fn link_last(&mut self, parent: NodeId, child: NodeId) {
        let last = self.get(parent).map_or(NodeId::NONE, |n| n.last_child);
        if let Some(node) = self.get_mut(child) {
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if let Some(prev) = self.get_mut(last) {
            prev.next_sibling = child;
        } else if let Some(node) = self.get_mut(parent) {
            node.first_child = child;
        }
        if let Some(node) = self.get_mut(parent) {
            node.last_child = child;
        }
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = self.get(current).map_or(NodeId::NONE, |n| n.parent);
        }
        false
    }

    /// Iterate over direct children
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(parent).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Iterate over direct children that are elements
    pub fn element_children(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(parent)
            .filter(|(_, node)| node.is_element())
            .map(|(id, _)| id)
    }

    /// First child that is an element, skipping text and comments
    pub fn first_element_child(&self, parent: NodeId) -> Option<NodeId> {
        self.element_children(parent).next()
    }

    /// Iterate over all descendants in document order (excluding `scope`)
    pub fn descendants(&self, scope: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            scope,
            next: self.get(scope).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Sort node ids into document order; detached nodes go last
    pub fn sort_document_order(&self, ids: &mut [NodeId]) {
        if ids.len() < 2 {
            return;
        }
        let mut rank = vec![usize::MAX; self.nodes.len()];
        rank[NodeId::ROOT.index()] = 0;
        for (position, (id, _)) in self.descendants(NodeId::ROOT).enumerate() {
            rank[id.index()] = position + 1;
        }
        ids.sort_by_key(|id| rank.get(id.index()).copied().unwrap_or(usize::MAX));
    }
}

/// Id for the arena slot at `index`
fn slot_id(index: usize) -> DomResult<NodeId> {
    u32::try_from(index)
        .ok()
        .filter(|&index| index != NodeId::NONE.0)
        .map(NodeId)
        .ok_or(DomError::ArenaFull)
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the direct children of a node
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Pre-order iterator over the descendants of a node
pub struct Descendants<'a> {
    tree: &'a DomTree,
    scope: NodeId,
    next: NodeId,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;

        self.next = if node.first_child.is_valid() {
            node.first_child
        } else {
            // Climb until a following sibling exists, stopping at the scope
            let mut current = id;
            loop {
                if current == self.scope {
                    break NodeId::NONE;
                }
                let Some(n) = self.tree.get(current) else {
                    break NodeId::NONE;
                };
                if n.next_sibling.is_valid() {
                    break n.next_sibling;
                }
                current = n.parent;
            }
        };

        Some((id, node))
    }
}
