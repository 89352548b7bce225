//! Location resolution: resolver strategies, the fallback pipeline, and the
//! per-process result cache.
//!
//! Each strategy answers the same question ("where is this request coming
//! from / where am I running") from a different source. The pipeline tries
//! them in a fixed order and takes the first answer; the cache makes the
//! answer a once-per-process affair.

mod cache;
mod instance;
mod pipeline;
mod public_ip;

pub use cache::LocationCache;
pub use instance::InstanceLocationResolver;
pub use pipeline::{LocationOutcome, LocationPipeline};
pub use public_ip::PublicIpLocationResolver;

use async_trait::async_trait;

use crate::error_handling::LocationError;
use crate::geo::Geo;

/// A single strategy for resolving the current location.
///
/// Strategies are interchangeable from the pipeline's point of view: any
/// error just means "ask the next one".
#[async_trait]
pub trait LocationResolver: Send + Sync {
    /// Short name for log lines.
    fn name(&self) -> &'static str;

    /// Attempts to resolve a location. May suspend on network I/O.
    async fn resolve(&self) -> Result<Geo, LocationError>;
}
