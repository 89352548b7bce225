//! Per-process cache of the pipeline's outcome.

use tokio::sync::OnceCell;

use super::{LocationOutcome, LocationPipeline};

/// Holds the single location answer for the lifetime of the process.
///
/// Cache policy: the pipeline runs at most once per process; every request
/// (and the startup log line) sees the same outcome. A process restart is
/// the way to pick up a changed network environment. The cache is explicit
/// state injected into the request handler, not a global.
pub struct LocationCache {
    pipeline: LocationPipeline,
    outcome: OnceCell<LocationOutcome>,
}

impl LocationCache {
    pub fn new(pipeline: LocationPipeline) -> Self {
        LocationCache {
            pipeline,
            outcome: OnceCell::new(),
        }
    }

    /// Creates a cache with a pre-resolved outcome. For tests.
    pub fn with_outcome(outcome: LocationOutcome) -> Self {
        LocationCache {
            pipeline: LocationPipeline::new(vec![]),
            outcome: OnceCell::new_with(Some(outcome)),
        }
    }

    /// Returns the cached outcome, running the pipeline on first use.
    ///
    /// Concurrent first calls are serialized by the cell; the pipeline still
    /// runs only once.
    pub async fn get(&self) -> &LocationOutcome {
        self.outcome
            .get_or_init(|| self.pipeline.resolve())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Geo;

    #[tokio::test]
    async fn test_preresolved_outcome_is_returned_as_is() {
        let geo = Geo::new("Hamina", None, "Finland", "FI");
        let cache = LocationCache::with_outcome(LocationOutcome::Resolved(geo.clone()));
        assert_eq!(cache.get().await, &LocationOutcome::Resolved(geo));
    }

    #[tokio::test]
    async fn test_empty_pipeline_caches_unknown() {
        let cache = LocationCache::new(LocationPipeline::new(vec![]));
        assert_eq!(cache.get().await, &LocationOutcome::Unknown);
        // Second call hits the cached value.
        assert_eq!(cache.get().await, &LocationOutcome::Unknown);
    }
}
