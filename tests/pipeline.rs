// Pipeline ordering tests with counting stub resolvers.
//
// These verify the strict two-stage fallback contract: first success wins,
// later resolvers are never consulted after a success, and only total
// failure collapses to Unknown.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use whereami::{Geo, LocationError, LocationOutcome, LocationPipeline, LocationResolver};

/// Resolver stub that counts its invocations and returns a fixed answer.
struct StubResolver {
    name: &'static str,
    geo: Option<Geo>,
    calls: Arc<AtomicUsize>,
}

impl StubResolver {
    fn succeeding(name: &'static str, geo: Geo) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            StubResolver {
                name,
                geo: Some(geo),
                calls: calls.clone(),
            },
            calls,
        )
    }

    fn failing(name: &'static str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            StubResolver {
                name,
                geo: None,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl LocationResolver for StubResolver {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn resolve(&self) -> Result<Geo, LocationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.geo
            .clone()
            .ok_or_else(|| LocationError::MetadataUnavailable("stubbed failure".to_string()))
    }
}

fn sample_geo() -> Geo {
    Geo::new("Council Bluffs", Some("Iowa"), "United States", "US")
}

#[tokio::test]
async fn first_resolver_success_skips_the_fallback() {
    let (first, first_calls) = StubResolver::succeeding("first", sample_geo());
    let (second, second_calls) = StubResolver::succeeding("second", Geo::new("X", None, "Y", "Z"));

    let pipeline = LocationPipeline::new(vec![Box::new(first), Box::new(second)]);
    let outcome = pipeline.resolve().await;

    assert_eq!(outcome, LocationOutcome::Resolved(sample_geo()));
    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn fallback_runs_after_first_resolver_fails() {
    let (first, first_calls) = StubResolver::failing("first");
    let (second, second_calls) = StubResolver::succeeding("second", sample_geo());

    let pipeline = LocationPipeline::new(vec![Box::new(first), Box::new(second)]);
    let outcome = pipeline.resolve().await;

    assert_eq!(outcome, LocationOutcome::Resolved(sample_geo()));
    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn all_resolvers_failing_is_unknown() {
    let (first, first_calls) = StubResolver::failing("first");
    let (second, second_calls) = StubResolver::failing("second");

    let pipeline = LocationPipeline::new(vec![Box::new(first), Box::new(second)]);
    let outcome = pipeline.resolve().await;

    assert_eq!(outcome, LocationOutcome::Unknown);
    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 1);
}
