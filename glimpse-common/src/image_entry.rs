use serde::{Deserialize, Serialize};

/// One image in the gallery catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    /// Locator for the image resource
    pub url: String,
    /// Alternative text, also shown under the caption
    #[serde(default)]
    pub alt: String,
    /// Display caption
    #[serde(default)]
    pub title: String,
}

impl ImageEntry {
    pub fn new(url: impl Into<String>, alt: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
            title: title.into(),
        }
    }
}
