//! Hero image determination
//!
//! Flags the images a visitor most likely sees first so the preload step can
//! fetch them early. Sources are checked in this order:
//! 1. Custom header
//! 2. Custom logo
//! 3. Featured image of the page
//! 4. Image block in initial position of the first entry content
//! 5. Cover block image in initial position of the first entry content
//!
//! The first [`PreloadConfig::max_hero_images`] hits receive the candidate
//! attribute (`data-hero-candidate` by default).
//!
//! # Example
//! ```rust,ignore
//! use hero_images::DetermineHeroImages;
//! use hero_optimizer::{ErrorCollection, PreloadConfig, Transformer};
//!
//! let transformer = DetermineHeroImages::new(&PreloadConfig::default());
//! let mut errors = ErrorCollection::new();
//! transformer.transform(&mut document, &mut errors);
//! ```

mod config;
mod mutator;
mod queries;
mod selector;
mod source;
mod transformer;

pub use config::{HeroImagePolicy, HeroImagesConfig};
pub use mutator::AttributeMutator;
pub use queries::HeroImageQueries;
pub use selector::CandidateSelector;
pub use source::HeroImageSource;
pub use transformer::DetermineHeroImages;

pub use hero_optimizer::PreloadConfig;
