//! Transformation Engine
//!
//! Runs a fixed sequence of transformers over one document.

use hero_dom::Document;

use crate::ErrorCollection;

/// An in-place document transformation
///
/// Implementations must not panic on unexpected markup; problems worth
/// reporting go into `errors`.
pub trait Transformer: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Apply the transformation to `document`
    fn transform(&self, document: &mut Document, errors: &mut ErrorCollection);
}

/// Ordered transformer pipeline
#[derive(Default)]
pub struct TransformationEngine {
    transformers: Vec<Box<dyn Transformer>>,
}

impl TransformationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transformer to the end of the pipeline
    pub fn with(mut self, transformer: impl Transformer + 'static) -> Self {
        self.transformers.push(Box::new(transformer));
        self
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    /// Run every transformer in order over `document`
    pub fn optimize(&self, document: &mut Document, errors: &mut ErrorCollection) {
        for transformer in &self.transformers {
            let before = errors.count();
            transformer.transform(document, errors);
            tracing::debug!(
                "Transformer {} finished ({} new errors)",
                transformer.name(),
                errors.count() - before
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransformError;
    use std::sync::Mutex;

    struct Record {
        label: &'static str,
        log: std::sync::Arc<Mutex<Vec<&'static str>>>,
    }

    impl Transformer for Record {
        fn name(&self) -> &str {
            self.label
        }

        fn transform(&self, document: &mut Document, errors: &mut ErrorCollection) {
            self.log.lock().unwrap().push(self.label);
            let body = document.body();
            if document.set_attribute(body, "data-seen", self.label).is_err() {
                errors.add(TransformError::new("NoBody", "document has no body"));
            }
        }
    }

    #[test]
    fn test_runs_in_order() {
        let log = std::sync::Arc::new(Mutex::new(Vec::new()));
        let engine = TransformationEngine::new()
            .with(Record { label: "first", log: log.clone() })
            .with(Record { label: "second", log: log.clone() });
        assert_eq!(engine.len(), 2);

        let mut document = Document::default();
        let mut errors = ErrorCollection::new();
        engine.optimize(&mut document, &mut errors);

        assert_eq!(*log.lock().unwrap(), ["first", "second"]);
        let body = document.tree().element(document.body()).unwrap();
        assert_eq!(body.get_attr("data-seen"), Some("second"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_errors_are_collected_not_raised() {
        let log = std::sync::Arc::new(Mutex::new(Vec::new()));
        let engine = TransformationEngine::new().with(Record { label: "only", log });

        let mut document = Document::empty("about:blank");
        let mut errors = ErrorCollection::new();
        engine.optimize(&mut document, &mut errors);

        assert!(errors.has("NoBody"));
    }
}
