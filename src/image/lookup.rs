//! Public-domain image lookup via Google Custom Search.

use std::sync::Arc;

use log::debug;
use serde::Deserialize;
use url::Url;

use crate::error_handling::ImageError;
use crate::geo::Geo;

use super::config::ImageSearchConfig;

/// Looks up one representative public-domain image for a location.
///
/// Image lookup is strictly best-effort enrichment: every failure collapses
/// into an [`ImageError`] the caller logs and renders around, never a hard
/// failure of the request.
pub struct ImageLookupService {
    client: Arc<reqwest::Client>,
    base_url: String,
    config: Option<ImageSearchConfig>,
}

/// Wire shape of the custom search response: an `items` array of links.
/// `items` is absent entirely when the search has no results.
#[derive(Debug, Deserialize)]
struct SearchResults {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    link: String,
}

impl ImageLookupService {
    pub fn new(
        client: Arc<reqwest::Client>,
        base_url: String,
        config: Option<ImageSearchConfig>,
    ) -> Self {
        ImageLookupService {
            client,
            base_url,
            config,
        }
    }

    /// Searches for one public-domain image matching the location.
    ///
    /// Without configured credentials this fails immediately with
    /// `MissingConfig` and makes no network call at all. Otherwise it issues
    /// a single image search (first result only, safe search, public-domain
    /// license filter) and validates the returned link as a well-formed URL.
    pub async fn lookup(&self, geo: &Geo) -> Result<Url, ImageError> {
        let config = self.config.as_ref().ok_or(ImageError::MissingConfig)?;

        let query = geo.search_string();
        debug!("searching for an image of {query:?}");

        let results: SearchResults = self
            .client
            .get(format!("{}/customsearch/v1", self.base_url))
            .query(&[
                ("q", query.as_str()),
                ("num", "1"),
                ("safe", "active"),
                ("searchType", "image"),
                ("rights", "cc_publicdomain"),
                ("cx", &config.cx),
                ("key", &config.key),
            ])
            .send()
            .await
            .map_err(|e| ImageError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| ImageError::Transport(e.to_string()))?
            .json()
            .await
            .map_err(|e| ImageError::Transport(e.to_string()))?;

        let first = results.items.first().ok_or(ImageError::NoImage)?;
        Url::parse(&first.link).map_err(|_| ImageError::NoImage)
    }
}
