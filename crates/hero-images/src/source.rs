//! Hero image sources
//!
//! Each source runs one structural query and yields its candidates in
//! document order. Positional sources only ever look inside the first entry
//! content region.

use hero_dom::{Document, ElementQuery, NodeId, QueryError};

use crate::HeroImageQueries;

/// A place a hero image can come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroImageSource {
    /// Image inside the theme's custom header
    CustomHeader,
    /// Site logo image
    CustomLogo,
    /// Featured image (post thumbnail)
    FeaturedImage,
    /// Image block opening the first entry content
    InitialImageBlock,
    /// Cover block background opening the first entry content
    InitialCoverBlock,
    /// Every cover block background in the document
    CoverBlocks,
}

impl HeroImageSource {
    pub fn name(self) -> &'static str {
        match self {
            Self::CustomHeader => "custom_header",
            Self::CustomLogo => "custom_logo",
            Self::FeaturedImage => "featured_image",
            Self::InitialImageBlock => "initial_image_block",
            Self::InitialCoverBlock => "initial_cover_block",
            Self::CoverBlocks => "cover_blocks",
        }
    }

    /// Find this source's candidates in `document`
    ///
    /// Single-match sources yield at most one element.
    pub fn find(self, document: &Document, queries: &HeroImageQueries) -> Result<Vec<NodeId>, QueryError> {
        let body = document.body();
        if !body.is_valid() {
            return Ok(Vec::new());
        }
        let first = match self {
            Self::CustomHeader => document.query_first(&queries.custom_header, body)?,
            Self::CustomLogo => document.query_first(&queries.custom_logo, body)?,
            Self::FeaturedImage => document.query_first(&queries.featured_image, body)?,
            Self::InitialImageBlock | Self::InitialCoverBlock => {
                let Some(content) = document.query_first(&queries.entry_content, body)? else {
                    return Ok(Vec::new());
                };
                let query = if self == Self::InitialImageBlock {
                    &queries.initial_image_block
                } else {
                    &queries.initial_cover_block
                };
                document.query_first(query, content)?
            }
            Self::CoverBlocks => return document.query(&queries.cover_blocks, body),
        };
        Ok(first.into_iter().collect())
    }
}

impl std::fmt::Display for HeroImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
