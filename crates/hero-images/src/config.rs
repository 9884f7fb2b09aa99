//! Hero image selection settings

use hero_optimizer::ConfigError;
use serde::Deserialize;

use crate::HeroImageSource;

/// Which sources are consulted, and in what order
///
/// The two policies are alternatives; each runs its own fixed list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeroImagePolicy {
    /// Header, logo, featured image, then the image block or cover block that
    /// opens the first entry content
    #[default]
    InitialBlocks,
    /// Header, logo, featured image, then every cover block background image
    /// in the document
    CoverBlocks,
}

impl HeroImagePolicy {
    /// Sources in priority order
    pub fn sources(self) -> &'static [HeroImageSource] {
        use HeroImageSource::*;
        match self {
            Self::InitialBlocks => &[
                CustomHeader,
                CustomLogo,
                FeaturedImage,
                InitialImageBlock,
                InitialCoverBlock,
            ],
            Self::CoverBlocks => &[CustomHeader, CustomLogo, FeaturedImage, CoverBlocks],
        }
    }
}

/// Hero image transformer settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HeroImagesConfig {
    pub policy: HeroImagePolicy,
}

impl HeroImagesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn policy(mut self, policy: HeroImagePolicy) -> Self {
        self.policy = policy;
        self
    }
}
