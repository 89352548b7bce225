//! Location from GCE instance metadata.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::config::{METADATA_FLAVOR_HEADER, METADATA_FLAVOR_VALUE};
use crate::error_handling::LocationError;
use crate::geo::{lookup_zone, Geo};

use super::LocationResolver;

/// Resolves location from the instance metadata server's reported zone.
///
/// Only works on a GCE instance; everywhere else the metadata endpoint is
/// unreachable and `resolve` fails with `MetadataUnavailable`, which is the
/// normal trigger for the public-IP fallback rather than a problem.
pub struct InstanceLocationResolver {
    client: Arc<reqwest::Client>,
    metadata_base_url: String,
}

impl InstanceLocationResolver {
    pub fn new(client: Arc<reqwest::Client>, metadata_base_url: String) -> Self {
        InstanceLocationResolver {
            client,
            metadata_base_url,
        }
    }

    /// Fetches the raw zone value from the metadata server.
    ///
    /// The body is a slash-delimited path like
    /// `projects/419070/zones/us-central1-a`.
    async fn fetch_zone(&self) -> Result<String, LocationError> {
        let url = format!("{}/computeMetadata/v1/instance/zone", self.metadata_base_url);
        let response = self
            .client
            .get(&url)
            .header(METADATA_FLAVOR_HEADER, METADATA_FLAVOR_VALUE)
            .send()
            .await
            .map_err(|e| LocationError::MetadataUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LocationError::MetadataUnavailable(format!(
                "metadata server answered {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| LocationError::MetadataUnavailable(e.to_string()))
    }
}

/// Extracts the zone identifier from the metadata server's slash-delimited
/// zone path. The zone is the final path segment.
fn zone_from_metadata(body: &str) -> &str {
    body.trim().rsplit('/').next().unwrap_or("").trim()
}

#[async_trait]
impl LocationResolver for InstanceLocationResolver {
    fn name(&self) -> &'static str {
        "instance-metadata"
    }

    async fn resolve(&self) -> Result<Geo, LocationError> {
        let body = self.fetch_zone().await?;
        let zone = zone_from_metadata(&body);
        debug!("metadata server reports zone {zone:?}");

        lookup_zone(zone)
            .cloned()
            .ok_or_else(|| LocationError::UnknownRegion(zone.to_string()))
    }
}
