use glimpse_common::{CatalogError, GalleryConfig};
use tracing::info;

/// Fetch a JSON catalog (config object or bare entry array) from `url`
pub async fn fetch_catalog(url: &str) -> Result<GalleryConfig, CatalogError> {
    info!("Fetching catalog from {}", url);
    let body = reqwest::get(url)
        .await
        .and_then(|resp| resp.error_for_status())
        .map_err(|e| CatalogError::Fetch(e.to_string()))?
        .text()
        .await
        .map_err(|e| CatalogError::Fetch(e.to_string()))?;
    GalleryConfig::from_json(&body)
}

/// Catalog for this session: remote when `source` is given, embedded otherwise
pub async fn load_catalog(source: Option<String>) -> Result<GalleryConfig, CatalogError> {
    match source {
        Some(url) if !url.trim().is_empty() => fetch_catalog(url.trim()).await,
        _ => GalleryConfig::embedded(),
    }
}
