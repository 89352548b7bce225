//! Image search credential resolution.

use std::sync::Arc;

use log::{debug, info};

use crate::config::{
    Config, METADATA_FLAVOR_HEADER, METADATA_FLAVOR_VALUE, SEARCH_CX_ATTRIBUTE,
    SEARCH_KEY_ATTRIBUTE,
};

/// Credentials for the Google Custom Search API.
///
/// Both values are required before any search request goes out.
#[derive(Debug, Clone)]
pub struct ImageSearchConfig {
    /// Custom search engine id
    pub cx: String,
    /// API key
    pub key: String,
}

/// Resolves search credentials from the available sources, in priority order:
///
/// 1. Explicit configuration (`--search-cx`/`--search-key` flags or the
///    `SEARCH_CX`/`SEARCH_KEY` environment variables)
/// 2. GCE project metadata attributes of the same names
///
/// A source only counts when it supplies *both* values. `None` is a normal,
/// expected state (the page renders without an image), never a startup
/// error, so this returns an `Option` rather than a `Result`.
pub async fn resolve_search_config(
    client: &Arc<reqwest::Client>,
    config: &Config,
) -> Option<ImageSearchConfig> {
    if let (Some(cx), Some(key)) = (&config.search_cx, &config.search_key) {
        info!("image search credentials taken from explicit configuration");
        return Some(ImageSearchConfig {
            cx: cx.clone(),
            key: key.clone(),
        });
    }

    let cx = fetch_project_attribute(client, &config.metadata_base_url, SEARCH_CX_ATTRIBUTE).await;
    let key =
        fetch_project_attribute(client, &config.metadata_base_url, SEARCH_KEY_ATTRIBUTE).await;

    match (cx, key) {
        (Some(cx), Some(key)) => {
            info!("image search credentials taken from project metadata");
            Some(ImageSearchConfig { cx, key })
        }
        _ => {
            info!("image search credentials not configured; pages will render without images");
            None
        }
    }
}

/// Reads one project metadata attribute, or `None` if the metadata server is
/// unreachable or the attribute is not set.
async fn fetch_project_attribute(
    client: &reqwest::Client,
    metadata_base_url: &str,
    attribute: &str,
) -> Option<String> {
    let url = format!(
        "{}/computeMetadata/v1/project/attributes/{}",
        metadata_base_url, attribute
    );
    let response = client
        .get(&url)
        .header(METADATA_FLAVOR_HEADER, METADATA_FLAVOR_VALUE)
        .send()
        .await
        .ok()?;

    if !response.status().is_success() {
        debug!("project attribute {attribute} not available: {}", response.status());
        return None;
    }

    let value = response.text().await.ok()?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
