//! Candidate Selector
//!
//! Walks the sources in priority order and keeps the first `max` distinct
//! candidates. Once the list is full no further source is consulted.

use hero_dom::{Document, NodeId, QueryError};
use hero_optimizer::PreloadConfig;

use crate::{HeroImagePolicy, HeroImageQueries, HeroImageSource};

/// Ordered, capped hero image selection
#[derive(Debug, Clone)]
pub struct CandidateSelector {
    sources: &'static [HeroImageSource],
    queries: HeroImageQueries,
    max: usize,
}

impl CandidateSelector {
    pub fn new(preload: &PreloadConfig, policy: HeroImagePolicy) -> Self {
        Self {
            sources: policy.sources(),
            queries: HeroImageQueries::new(preload),
            max: preload.max_hero_images,
        }
    }

    /// Sources in the order they are consulted
    pub fn sources(&self) -> &[HeroImageSource] {
        self.sources
    }

    /// Cap on selected elements
    pub fn max(&self) -> usize {
        self.max
    }

    /// Select up to `max` hero candidates, highest priority first
    pub fn select(&self, document: &Document) -> Vec<NodeId> {
        self.collect(|source| source.find(document, &self.queries))
    }

    fn collect<F>(&self, mut find: F) -> Vec<NodeId>
    where
        F: FnMut(HeroImageSource) -> Result<Vec<NodeId>, QueryError>,
    {
        let mut candidates: Vec<NodeId> = Vec::with_capacity(self.max);

        for &source in self.sources {
            if candidates.len() >= self.max {
                tracing::debug!("Hero image cap of {} reached before {}", self.max, source);
                break;
            }

            let found = match find(source) {
                Ok(found) => found,
                Err(err) => {
                    // A broken query only costs this source
                    tracing::warn!("Hero image source {} failed: {}", source, err);
                    continue;
                }
            };
            if found.is_empty() {
                tracing::trace!("No hero image from {}", source);
            }

            for element in found {
                if !candidates.contains(&element) {
                    tracing::debug!("Hero image candidate {:?} from {}", element, source);
                    candidates.push(element);
                }
            }
        }

        candidates.truncate(self.max);
        candidates
    }
}
