//! Hero image preload settings
//!
//! The preload step owns the cap on hero images and the attribute names used
//! to flag them; transforms that select hero images read these values instead
//! of defining their own.

use serde::Deserialize;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid preload configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Attribute name for `{field}` must not be empty or contain whitespace")]
    InvalidAttribute { field: &'static str },

    #[error("Candidate and hero attributes are both `{0}`")]
    SameAttribute(String),
}

/// Hero image preload settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PreloadConfig {
    /// Maximum number of images flagged per document
    pub max_hero_images: usize,
    /// Attribute marking an image as a hero candidate
    pub candidate_attribute: String,
    /// Attribute marking an image the author already declared as hero
    pub hero_attribute: String,
}

impl PreloadConfig {
    /// Default cap on hero images per document
    pub const DATA_HERO_MAX: usize = 2;
    /// Default candidate attribute
    pub const DATA_HERO_CANDIDATE: &'static str = "data-hero-candidate";
    /// Default hero attribute
    pub const DATA_HERO: &'static str = "data-hero";

    pub fn new() -> Self {
        Self::default()
    }

    /// Load from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn max_hero_images(mut self, max: usize) -> Self {
        self.max_hero_images = max;
        self
    }

    pub fn candidate_attribute(mut self, name: &str) -> Self {
        self.candidate_attribute = name.to_string();
        self
    }

    pub fn hero_attribute(mut self, name: &str) -> Self {
        self.hero_attribute = name.to_string();
        self
    }

    /// Check that both attribute names are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |name: &str| name.is_empty() || name.chars().any(char::is_whitespace);
        if invalid(&self.candidate_attribute) {
            return Err(ConfigError::InvalidAttribute { field: "candidate-attribute" });
        }
        if invalid(&self.hero_attribute) {
            return Err(ConfigError::InvalidAttribute { field: "hero-attribute" });
        }
        // Marked candidates would drop out of every hero query
        if self.candidate_attribute == self.hero_attribute {
            return Err(ConfigError::SameAttribute(self.hero_attribute.clone()));
        }
        Ok(())
    }
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            max_hero_images: Self::DATA_HERO_MAX,
            candidate_attribute: Self::DATA_HERO_CANDIDATE.into(),
            hero_attribute: Self::DATA_HERO.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PreloadConfig::default();
        assert_eq!(config.max_hero_images, 2);
        assert_eq!(config.candidate_attribute, "data-hero-candidate");
        assert_eq!(config.hero_attribute, "data-hero");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = PreloadConfig::from_json(r#"{ "max-hero-images": 3 }"#).unwrap();
        assert_eq!(config.max_hero_images, 3);
        assert_eq!(config.candidate_attribute, PreloadConfig::DATA_HERO_CANDIDATE);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            PreloadConfig::from_json(r#"{ "max-hero-images": -1 }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            PreloadConfig::from_json(r#"{ "candidate-attribute": "data hero" }"#),
            Err(ConfigError::InvalidAttribute { field: "candidate-attribute" })
        ));
    }

    #[test]
    fn test_validate_rejects_builder_mistakes() {
        let empty = PreloadConfig::new().candidate_attribute("");
        assert!(matches!(
            empty.validate(),
            Err(ConfigError::InvalidAttribute { field: "candidate-attribute" })
        ));

        let same = PreloadConfig::new().candidate_attribute("data-hero");
        assert!(matches!(same.validate(), Err(ConfigError::SameAttribute(ref name)) if name == "data-hero"));
        assert!(PreloadConfig::from_json(r#"{ "hero-attribute": "data-hero-candidate" }"#).is_err());
    }

    #[test]
    fn test_builder() {
        let config = PreloadConfig::new()
            .max_hero_images(1)
            .candidate_attribute("data-lcp")
            .hero_attribute("data-priority");
        assert_eq!(config.max_hero_images, 1);
        assert_eq!(config.candidate_attribute, "data-lcp");
        assert_eq!(config.hero_attribute, "data-priority");
    }
}
