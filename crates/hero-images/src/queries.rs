//! Structural queries for each hero image source
//!
//! Class and id tokens are the ones WordPress core and its bundled themes emit.
//!
//! Images the author declared as hero are never matched. Images already
//! carrying the candidate attribute stay matchable: they keep their slot on a
//! repeated run, and the mutator leaves them alone.

use hero_dom::{Predicate, Query};
use hero_optimizer::PreloadConfig;

/// Elements that render a raster image
const IMAGE_TAGS: &[&str] = &["img", "amp-img"];

/// Ids themes give the custom header container
const CUSTOM_HEADER_IDS: &[&str] = &["wp-custom-header", "masthead", "site-header"];
const CUSTOM_HEADER_CLASS: &str = "wp-custom-header";

const CUSTOM_LOGO_LINK_CLASS: &str = "custom-logo-link";
const CUSTOM_LOGO_CLASS: &str = "custom-logo";

const FEATURED_IMAGE_CLASS: &str = "wp-post-image";

const ENTRY_CONTENT_CLASS: &str = "entry-content";

const IMAGE_BLOCK_CLASS: &str = "wp-block-image";
const COVER_BLOCK_CLASS: &str = "wp-block-cover";
const COVER_IMAGE_CLASS: &str = "wp-block-cover__image-background";

/// Compiled queries, built once from the preload settings
#[derive(Debug, Clone)]
pub struct HeroImageQueries {
    /// Image inside the custom header, logo excluded (from `body`)
    pub custom_header: Query,
    /// Logo image inside the custom logo link (from `body`)
    pub custom_logo: Query,
    /// Featured image (from `body`)
    pub featured_image: Query,
    /// Content regions (from `body`); only the first one is used
    pub entry_content: Query,
    /// Image of an image block at the start of content (from the content region)
    pub initial_image_block: Query,
    /// Background image of a cover block at the start of content (from the content region)
    pub initial_cover_block: Query,
    /// Background images of every cover block (from `body`)
    pub cover_blocks: Query,
}

impl HeroImageQueries {
    pub fn new(preload: &PreloadConfig) -> Self {
        let unmarked_image =
            Predicate::tags(IMAGE_TAGS).and(Predicate::lacks_attr(preload.hero_attribute.as_str()));

        let custom_header_container = CUSTOM_HEADER_IDS
            .iter()
            .map(|id| Predicate::id(*id))
            .fold(Predicate::class(CUSTOM_HEADER_CLASS), Predicate::or);

        let cover_block = Predicate::tag("div").and(Predicate::class(COVER_BLOCK_CLASS));
        let cover_image = unmarked_image.clone().and(Predicate::class(COVER_IMAGE_CLASS));

        Self {
            custom_header: Query::new()
                .descendant(custom_header_container)
                .descendant(unmarked_image.clone().and(Predicate::lacks_class(CUSTOM_LOGO_CLASS))),
            custom_logo: Query::new()
                .descendant(Predicate::tag("a").and(Predicate::class(CUSTOM_LOGO_LINK_CLASS)))
                .descendant(unmarked_image.clone().and(Predicate::class(CUSTOM_LOGO_CLASS))),
            featured_image: Query::new()
                .descendant(unmarked_image.clone().and(Predicate::class(FEATURED_IMAGE_CLASS))),
            entry_content: Query::new().descendant(Predicate::class(ENTRY_CONTENT_CLASS)),
            initial_image_block: Query::new()
                .first_element_child(Predicate::Any)
                .descendant_or_self(Predicate::tag("figure").and(Predicate::class(IMAGE_BLOCK_CLASS)))
                .child(unmarked_image),
            initial_cover_block: Query::new()
                .first_element_child(Predicate::Any)
                .descendant_or_self(cover_block.clone())
                .child(cover_image.clone()),
            cover_blocks: Query::new().descendant(cover_block).child(cover_image),
        }
    }
}

impl Default for HeroImageQueries {
    fn default() -> Self {
        Self::new(&PreloadConfig::default())
    }
}
