//! Error type definitions.
//!
//! Every error in this service is recoverable: resolver failures mean "try
//! the next strategy", image failures mean "render without an image", and a
//! fully failed pipeline becomes the unknown-location page. Nothing here is
//! ever surfaced to the client as an HTTP error status.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for startup failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Ways a single location resolver can fail.
///
/// The pipeline treats every variant the same way: log it and move on to the
/// next resolver. The variants exist so the logs say *which* hop broke.
#[derive(Error, Debug)]
pub enum LocationError {
    /// The instance metadata endpoint was unreachable or answered with a
    /// non-success status. This is the expected outcome whenever the process
    /// is not running on the cloud platform, not an exceptional one.
    #[error("instance metadata unavailable: {0}")]
    MetadataUnavailable(String),

    /// The metadata service reported a zone with no entry in the zone table.
    #[error("no registered region matches zone {0:?}")]
    UnknownRegion(String),

    /// The public-IP echo or the geo-IP lookup failed (transport error,
    /// non-success status, or a body that did not parse).
    #[error("public IP lookup failed: {0}")]
    IpLookupFailed(String),
}

/// Ways an image lookup can fail.
///
/// None of these fail the request; the page renders without an image.
#[derive(Error, Debug)]
pub enum ImageError {
    /// Search credentials (cx/key) were not configured. Checked before any
    /// network call is made.
    #[error("image search credentials are not configured")]
    MissingConfig,

    /// The search succeeded but returned no results, or the first result's
    /// link was not a well-formed URL.
    #[error("no usable image in search results")]
    NoImage,

    /// Transport or decode failure talking to the image search API.
    #[error("image search request failed: {0}")]
    Transport(String),
}
