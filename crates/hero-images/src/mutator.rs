//! Attribute Mutator
//!
//! Flags selected elements with the candidate attribute.

use hero_dom::{Document, NodeId};

/// Sets a boolean attribute on selected elements
#[derive(Debug, Clone)]
pub struct AttributeMutator {
    attribute: String,
}

impl AttributeMutator {
    pub fn new(attribute: &str) -> Self {
        Self {
            attribute: attribute.to_string(),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Add the attribute (empty value) to every element in `elements`
    ///
    /// Elements already carrying it are left as they are.
    pub fn mark(&self, document: &mut Document, elements: &[NodeId]) {
        for &element in elements {
            let Some(elem) = document.tree_mut().element_mut(element) else {
                tracing::trace!("Skipping non-element {:?}", element);
                continue;
            };
            if elem.has_attr(&self.attribute) {
                continue;
            }
            elem.set_attr(&self.attribute, "");
            tracing::debug!("Marked <{}> {:?} with {}", elem.name(), element, self.attribute);
        }
    }
}
