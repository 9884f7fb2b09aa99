//! DetermineHeroImages transformer

use hero_dom::{Document, NodeId};
use hero_optimizer::{ErrorCollection, PreloadConfig, Transformer};

use crate::{AttributeMutator, CandidateSelector, HeroImageSource, HeroImagesConfig};

/// Flags hero image candidates so the preload step can prioritize them
///
/// Immutable after construction; one instance can process any number of
/// documents.
#[derive(Debug, Clone)]
pub struct DetermineHeroImages {
    selector: CandidateSelector,
    mutator: AttributeMutator,
}

impl DetermineHeroImages {
    /// Create with the default policy
    pub fn new(preload: &PreloadConfig) -> Self {
        Self::with_config(preload, &HeroImagesConfig::default())
    }

    /// Create with explicit settings
    ///
    /// Preload settings that fail validation are replaced by the defaults.
    pub fn with_config(preload: &PreloadConfig, config: &HeroImagesConfig) -> Self {
        let defaults;
        let preload = match preload.validate() {
            Ok(()) => preload,
            Err(err) => {
                tracing::warn!("Invalid preload settings, using defaults: {}", err);
                defaults = PreloadConfig::default();
                &defaults
            }
        };

        Self {
            selector: CandidateSelector::new(preload, config.policy),
            mutator: AttributeMutator::new(&preload.candidate_attribute),
        }
    }

    /// Attribute written on selected candidates
    pub fn candidate_attribute(&self) -> &str {
        self.mutator.attribute()
    }

    /// Sources in priority order
    pub fn sources(&self) -> &[HeroImageSource] {
        self.selector.sources()
    }

    /// Candidates that `transform` would mark, without touching the document
    pub fn select(&self, document: &Document) -> Vec<NodeId> {
        self.selector.select(document)
    }

    /// Flag `candidates` with the candidate attribute
    pub fn mark(&self, document: &mut Document, candidates: &[NodeId]) {
        self.mutator.mark(document, candidates);
    }
}

impl Default for DetermineHeroImages {
    fn default() -> Self {
        Self::new(&PreloadConfig::default())
    }
}

impl Transformer for DetermineHeroImages {
    fn name(&self) -> &str {
        "DetermineHeroImages"
    }

    fn transform(&self, document: &mut Document, _errors: &mut ErrorCollection) {
        let candidates = self.select(document);
        tracing::debug!(
            "Selected {} hero image candidate(s) in {}",
            candidates.len(),
            document.url()
        );
        self.mark(document, &candidates);
    }
}
