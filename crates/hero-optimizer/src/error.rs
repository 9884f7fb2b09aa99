//! Transformation errors
//!
//! Transformers never fail outright; they record what went wrong here and
//! leave the document in a usable state.

/// A non-fatal problem reported by a transformer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct TransformError {
    /// Stable machine-readable code (e.g. `CannotPreloadImage`)
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl TransformError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Ordered collection of errors gathered during one pipeline run
#[derive(Debug, Clone, Default)]
pub struct ErrorCollection {
    errors: Vec<TransformError>,
}

impl ErrorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error
    pub fn add(&mut self, error: TransformError) {
        tracing::debug!("Transform error recorded: {}", error);
        self.errors.push(error);
    }

    /// Check whether an error with `code` was recorded
    pub fn has(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    pub fn count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransformError> {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for &'a ErrorCollection {
    type Item = &'a TransformError;
    type IntoIter = std::slice::Iter<'a, TransformError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
