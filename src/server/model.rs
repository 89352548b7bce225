//! Render model assembly.

use log::error;
use url::Url;

use crate::geo::Geo;
use crate::image::ImageLookupService;
use crate::location::{LocationCache, LocationOutcome};

/// Everything the index template needs for a resolved location.
///
/// Built once per request and handed straight to the view; nothing is kept
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    /// The resolved location.
    pub geo: Geo,
    /// A representative image, when the lookup succeeded. `None` covers both
    /// "not configured" and "lookup failed" — the page renders either way.
    pub image: Option<Url>,
}

/// Combines the cached location outcome with a best-effort image lookup.
///
/// Returns `None` when the location itself is unknown (the view shows the
/// unknown-location page). When the location is resolved, the image lookup
/// is chained after it; an image failure is logged and swallowed, so
/// location-plus-no-image is a normal, fully rendered outcome rather than an
/// error state.
pub async fn assemble(
    location: &LocationCache,
    images: &ImageLookupService,
) -> Option<RenderModel> {
    match location.get().await {
        LocationOutcome::Unknown => None,
        LocationOutcome::Resolved(geo) => {
            let image = match images.lookup(geo).await {
                Ok(url) => Some(url),
                Err(err) => {
                    error!("could not get image for {}: {}", geo.search_string(), err);
                    None
                }
            };
            Some(RenderModel {
                geo: geo.clone(),
                image,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn image_service_without_config() -> ImageLookupService {
        ImageLookupService::new(
            Arc::new(reqwest::Client::new()),
            "http://127.0.0.1:1".to_string(),
            None,
        )
    }

    #[tokio::test]
    async fn test_unknown_location_yields_no_model() {
        let cache = LocationCache::with_outcome(LocationOutcome::Unknown);
        let model = assemble(&cache, &image_service_without_config()).await;
        assert_eq!(model, None);
    }

    #[tokio::test]
    async fn test_image_failure_still_yields_geo() {
        let geo = Geo::new("Council Bluffs", Some("Iowa"), "United States", "US");
        let cache = LocationCache::with_outcome(LocationOutcome::Resolved(geo.clone()));

        // Image lookup fails (no credentials), but the model still carries
        // the location with an explicit image-absent marker.
        let model = assemble(&cache, &image_service_without_config())
            .await
            .expect("location resolved, so a model must exist");
        assert_eq!(model.geo, geo);
        assert_eq!(model.image, None);
    }
}
