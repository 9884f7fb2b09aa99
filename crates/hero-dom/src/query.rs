//! Structural Queries
//!
//! A [`Query`] is a chain of [`Step`]s, each moving along an [`Axis`] from the
//! current context nodes and keeping the elements that satisfy a
//! [`Predicate`]. Results are always returned in document order without
//! duplicates.
//!
//! ```text
//! body
//!   └─ descendant  [ .entry-content ]
//!        └─ first-element-child [ * ]
//!             └─ descendant-or-self [ figure.wp-block-image ]
//!                  └─ child [ img | amp-img ]
//! ```

use std::collections::HashSet;

use crate::{Document, DomTree, ElementData, NodeData, NodeId};

/// Structural query errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Query scope {0:?} is not an element or document node")]
    InvalidScope(NodeId),

    #[error("Query has no steps")]
    EmptyQuery,
}

/// Element predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Matches every element
    Any,
    /// Tag name equals (lowercase)
    Tag(String),
    /// `id` attribute equals
    Id(String),
    /// Class token present
    Class(String),
    /// Attribute present, whatever its value
    HasAttr(String),
    Not(Box<Predicate>),
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
}

impl Predicate {
    pub fn tag(name: &str) -> Self {
        Self::Tag(name.to_ascii_lowercase())
    }

    /// Tag name is one of `names`
    pub fn tags(names: &[&str]) -> Self {
        Self::Or(names.iter().map(|n| Self::tag(n)).collect())
    }

    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    pub fn has_attr(name: impl Into<String>) -> Self {
        Self::HasAttr(name.into())
    }

    /// Attribute absent
    pub fn lacks_attr(name: impl Into<String>) -> Self {
        Self::Not(Box::new(Self::has_attr(name)))
    }

    /// Class token absent
    pub fn lacks_class(class: impl Into<String>) -> Self {
        Self::Not(Box::new(Self::class(class)))
    }

    /// Conjunction, flattening nested `And`s
    pub fn and(self, other: Predicate) -> Self {
        match (self, other) {
            (Self::Any, p) | (p, Self::Any) => p,
            (Self::And(mut a), Self::And(b)) => {
                a.extend(b);
                Self::And(a)
            }
            (Self::And(mut a), p) => {
                a.push(p);
                Self::And(a)
            }
            (p, Self::And(mut b)) => {
                b.insert(0, p);
                Self::And(b)
            }
            (a, b) => Self::And(vec![a, b]),
        }
    }

    /// Disjunction
    pub fn or(self, other: Predicate) -> Self {
        match self {
            Self::Or(mut a) => {
                a.push(other);
                Self::Or(a)
            }
            p => Self::Or(vec![p, other]),
        }
    }

    /// Check an element against the predicate
    pub fn matches(&self, elem: &ElementData) -> bool {
        match self {
            Self::Any => true,
            Self::Tag(name) => elem.name() == name,
            Self::Id(id) => elem.id() == Some(id.as_str()),
            Self::Class(class) => elem.has_class(class),
            Self::HasAttr(name) => elem.has_attr(name),
            Self::Not(p) => !p.matches(elem),
            Self::And(ps) => ps.iter().all(|p| p.matches(elem)),
            Self::Or(ps) => ps.iter().any(|p| p.matches(elem)),
        }
    }
}

/// Direction of travel for one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Direct element children
    Child,
    /// All descendants
    Descendant,
    /// The context node and all its descendants
    DescendantOrSelf,
    /// Only the first element child (text and comments skipped)
    FirstElementChild,
}

/// One query step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub axis: Axis,
    pub predicate: Predicate,
}

/// Structural query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    steps: Vec<Step>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, axis: Axis, predicate: Predicate) -> Self {
        self.steps.push(Step { axis, predicate });
        self
    }

    pub fn child(self, predicate: Predicate) -> Self {
        self.step(Axis::Child, predicate)
    }

    pub fn descendant(self, predicate: Predicate) -> Self {
        self.step(Axis::Descendant, predicate)
    }

    pub fn descendant_or_self(self, predicate: Predicate) -> Self {
        self.step(Axis::DescendantOrSelf, predicate)
    }

    pub fn first_element_child(self, predicate: Predicate) -> Self {
        self.step(Axis::FirstElementChild, predicate)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run the query from `scope`, returning matches in document order
    pub fn evaluate(&self, tree: &DomTree, scope: NodeId) -> Result<Vec<NodeId>, QueryError> {
        if self.steps.is_empty() {
            return Err(QueryError::EmptyQuery);
        }
        match tree.get(scope).map(|n| &n.data) {
            Some(NodeData::Element(_) | NodeData::Document) => {}
            _ => return Err(QueryError::InvalidScope(scope)),
        }

        let mut context = vec![scope];
        for step in &self.steps {
            let mut seen = HashSet::new();
            let mut next = Vec::new();
            for &node in &context {
                for candidate in axis_nodes(tree, node, step.axis) {
                    let matched = tree
                        .element(candidate)
                        .is_some_and(|e| step.predicate.matches(e));
                    if matched && seen.insert(candidate) {
                        next.push(candidate);
                    }
                }
            }
            // Results from several contexts may interleave
            if context.len() > 1 {
                tree.sort_document_order(&mut next);
            }
            if next.is_empty() {
                return Ok(next);
            }
            context = next;
        }

        Ok(context)
    }
}

fn axis_nodes(tree: &DomTree, node: NodeId, axis: Axis) -> Vec<NodeId> {
    match axis {
        Axis::Child => tree.element_children(node).collect(),
        Axis::Descendant => tree.descendants(node).map(|(id, _)| id).collect(),
        Axis::DescendantOrSelf => std::iter::once(node)
            .chain(tree.descendants(node).map(|(id, _)| id))
            .collect(),
        Axis::FirstElementChild => tree.first_element_child(node).into_iter().collect(),
    }
}

/// Query capability of a document
pub trait ElementQuery {
    /// All matches of `query` under `scope`, in document order
    fn query(&self, query: &Query, scope: NodeId) -> Result<Vec<NodeId>, QueryError>;

    /// First match of `query` under `scope`
    fn query_first(&self, query: &Query, scope: NodeId) -> Result<Option<NodeId>, QueryError> {
        Ok(self.query(query, scope)?.into_iter().next())
    }
}

impl ElementQuery for Document {
    fn query(&self, query: &Query, scope: NodeId) -> Result<Vec<NodeId>, QueryError> {
        query.evaluate(self.tree(), scope)
    }
}
