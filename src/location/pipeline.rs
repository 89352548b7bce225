//! The resolver fallback pipeline.

use std::sync::Arc;

use log::{info, warn};

use crate::config::Config;
use crate::geo::Geo;

use super::{InstanceLocationResolver, LocationResolver, PublicIpLocationResolver};

/// The single location answer produced for this process.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationOutcome {
    /// One of the resolvers produced a location.
    Resolved(Geo),
    /// Every resolver failed. The page still renders, just without a place.
    Unknown,
}

/// An ordered chain of location resolvers.
///
/// Strategies run strictly in order with no racing and no retries: the
/// instance-metadata path is authoritative and fails fast when the process
/// is not on the platform, so there is nothing to gain from running the
/// public-IP path concurrently. The first success wins; every intermediate
/// failure is logged and swallowed, and only a total failure becomes
/// [`LocationOutcome::Unknown`].
pub struct LocationPipeline {
    resolvers: Vec<Box<dyn LocationResolver>>,
}

impl LocationPipeline {
    /// Builds a pipeline from an explicit resolver chain. Mostly useful for
    /// tests; production code uses [`LocationPipeline::for_config`].
    pub fn new(resolvers: Vec<Box<dyn LocationResolver>>) -> Self {
        LocationPipeline { resolvers }
    }

    /// Builds the standard chain: instance metadata first, then public IP.
    pub fn for_config(client: &Arc<reqwest::Client>, config: &Config) -> Self {
        LocationPipeline::new(vec![
            Box::new(InstanceLocationResolver::new(
                client.clone(),
                config.metadata_base_url.clone(),
            )),
            Box::new(PublicIpLocationResolver::new(
                client.clone(),
                config.ipify_url.clone(),
                config.ip_api_base_url.clone(),
            )),
        ])
    }

    /// Runs the chain and returns the first success.
    ///
    /// Idempotent and side-effect free; successive calls under changing
    /// network conditions may return different outcomes. Caching is the
    /// concern of [`super::LocationCache`], not the pipeline.
    pub async fn resolve(&self) -> LocationOutcome {
        for resolver in &self.resolvers {
            match resolver.resolve().await {
                Ok(geo) => {
                    info!(
                        "resolved location via {}: {}",
                        resolver.name(),
                        geo.search_string()
                    );
                    return LocationOutcome::Resolved(geo);
                }
                Err(err) => {
                    // Expected whenever a source is absent (e.g. no metadata
                    // server off-cloud); the next strategy gets its turn.
                    warn!("location resolver {} failed: {}", resolver.name(), err);
                }
            }
        }

        warn!("no location resolver succeeded; location is unknown");
        LocationOutcome::Unknown
    }
}
