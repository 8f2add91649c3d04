//! Gallery catalog loading
//!
//! The catalog is read once at startup and is immutable for the session. The
//! built-in catalog ships as YAML; remote catalogs are JSON and may be either
//! a full config object or a bare array of entries.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ImageEntry;

const EMBEDDED_CATALOG: &str = include_str!("../gallery.yaml");

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog YAML: {0}")]
    InvalidYaml(String),
    #[error("invalid catalog JSON: {0}")]
    InvalidJson(String),
    #[error("image {index} has an empty url")]
    EmptyUrl { index: usize },
    #[error("failed to fetch catalog: {0}")]
    Fetch(String),
}

/// Page text plus the ordered image sequence
///
/// `images` is required and unknown keys are rejected, so a misspelled key
/// fails to load instead of producing an empty gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GalleryConfig {
    #[serde(default = "default_brand")]
    pub brand: String,
    #[serde(default = "default_heading")]
    pub heading: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub footer_note: String,
    pub images: Vec<ImageEntry>,
}

fn default_brand() -> String {
    "Gallery".to_string()
}

fn default_heading() -> String {
    "My Gallery".to_string()
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            heading: default_heading(),
            tagline: String::new(),
            footer_note: String::new(),
            images: Vec::new(),
        }
    }
}

impl GalleryConfig {
    /// The catalog compiled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_yaml(EMBEDDED_CATALOG)
    }

    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let config: GalleryConfig =
            serde_yaml::from_str(source).map_err(|e| CatalogError::InvalidYaml(e.to_string()))?;
        let config = config.validated()?;
        info!("Loaded YAML catalog with {} images", config.images.len());
        Ok(config)
    }

    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let invalid = |e: serde_json::Error| CatalogError::InvalidJson(e.to_string());
        let value: serde_json::Value = serde_json::from_str(source).map_err(invalid)?;
        // A bare array is just the entries; anything else must be a full config
        let config = if value.is_array() {
            GalleryConfig {
                images: serde_json::from_value(value).map_err(invalid)?,
                ..Default::default()
            }
        } else {
            serde_json::from_value(value).map_err(invalid)?
        };
        let config = config.validated()?;
        info!("Loaded JSON catalog with {} images", config.images.len());
        Ok(config)
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    fn validated(self) -> Result<Self, CatalogError> {
        if let Some(index) = self.images.iter().position(|image| image.url.trim().is_empty()) {
            return Err(CatalogError::EmptyUrl { index });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let config = GalleryConfig::embedded().unwrap();
        assert_eq!(config.images.len(), 3);
        assert!(config.images.iter().all(|image| !image.url.is_empty()));
        assert!(!config.brand.is_empty());
    }

    #[test]
    fn yaml_missing_fields_use_defaults() {
        let config = GalleryConfig::from_yaml("images: []\n").unwrap();
        assert_eq!(config.brand, "Gallery");
        assert_eq!(config.heading, "My Gallery");
        assert!(config.is_empty());
    }

    #[test]
    fn yaml_entry_without_alt_or_title() {
        let config = GalleryConfig::from_yaml("images:\n  - url: https://img.test/a.jpg\n").unwrap();
        assert_eq!(config.images[0].url, "https://img.test/a.jpg");
        assert_eq!(config.images[0].alt, "");
        assert_eq!(config.images[0].title, "");
    }

    #[test]
    fn json_bare_array() {
        let json = r#"[
            {"url": "https://img.test/a.jpg", "alt": "A", "title": "First"},
            {"url": "https://img.test/b.jpg", "alt": "B", "title": "Second"}
        ]"#;
        let config = GalleryConfig::from_json(json).unwrap();
        assert_eq!(config.images.len(), 2);
        assert_eq!(config.images[1].title, "Second");
        assert_eq!(config.brand, "Gallery");
    }

    #[test]
    fn json_full_config() {
        let json = r#"{
            "brand": "Studio",
            "heading": "Portfolio",
            "images": [{"url": "https://img.test/a.jpg", "alt": "A", "title": "First"}]
        }"#;
        let config = GalleryConfig::from_json(json).unwrap();
        assert_eq!(config.brand, "Studio");
        assert_eq!(config.heading, "Portfolio");
        assert_eq!(config.images.len(), 1);
    }

    #[test]
    fn json_garbage_is_an_error() {
        let err = GalleryConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidJson(_)));
    }

    #[test]
    fn empty_url_is_rejected() {
        let json = r#"[{"url": "https://img.test/a.jpg"}, {"url": "  "}]"#;
        let err = GalleryConfig::from_json(json).unwrap_err();
        assert_eq!(err, CatalogError::EmptyUrl { index: 1 });
    }

    #[test]
    fn json_misspelled_images_key_is_an_error() {
        let err = GalleryConfig::from_json(r#"{"imgs": [{"url": "https://img.test/a.jpg"}]}"#)
            .unwrap_err();
        match err {
            CatalogError::InvalidJson(message) => assert!(message.contains("imgs"), "{message}"),
            other => panic!("expected InvalidJson, got {other:?}"),
        }
    }

    #[test]
    fn json_object_without_images_is_an_error() {
        let err = GalleryConfig::from_json(r#"{"brand": "Studio"}"#).unwrap_err();
        match err {
            CatalogError::InvalidJson(message) => assert!(message.contains("images"), "{message}"),
            other => panic!("expected InvalidJson, got {other:?}"),
        }
    }

    #[test]
    fn json_entry_without_url_reports_missing_field() {
        for json in [
            r#"{"images": [{"alt": "no url"}]}"#,
            r#"[{"alt": "no url"}]"#,
        ] {
            match GalleryConfig::from_json(json).unwrap_err() {
                CatalogError::InvalidJson(message) => {
                    assert!(message.contains("missing field `url`"), "{message}")
                }
                other => panic!("expected InvalidJson, got {other:?}"),
            }
        }
    }

    #[test]
    fn yaml_misspelled_images_key_is_an_error() {
        let err = GalleryConfig::from_yaml("imgs: []\n").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidYaml(_)));
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let err = GalleryConfig::from_yaml("images: [").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidYaml(_)));
    }
}
