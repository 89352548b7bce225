//! Configuration constants.
//!
//! Defaults for the listen port, upstream endpoints, and timeouts. The
//! endpoint values are defaults only: `Config` carries them as fields so
//! tests can point the service at local stub servers.

/// Default HTTP listen port, used when `PORT` / `--port` is not set.
pub const DEFAULT_PORT: u16 = 8080;

/// Per-upstream-call timeout in seconds.
///
/// None of the upstream services defines an SLA; the important property is
/// that a hung call fails fast enough for the resolver fallback chain (and
/// the page render) to proceed. Timeouts behave like any other transport
/// failure.
pub const HTTP_TIMEOUT_SECS: u64 = 5;

/// GCE instance metadata server base URL.
pub const METADATA_BASE_URL: &str = "http://metadata.google.internal";

/// Header that asserts the request intends to talk to the metadata service.
/// The metadata server rejects requests without it.
pub const METADATA_FLAVOR_HEADER: &str = "Metadata-Flavor";
/// Required value for [`METADATA_FLAVOR_HEADER`].
pub const METADATA_FLAVOR_VALUE: &str = "Google";

/// Public IP echo service; responds with a bare IP address in plain text.
pub const IPIFY_URL: &str = "https://api.ipify.org";

/// Geo-IP lookup service base URL; `GET {base}/json/{ip}` returns JSON.
pub const IP_API_BASE_URL: &str = "http://ip-api.com";

/// Google Custom Search base URL; `GET {base}/customsearch/v1`.
pub const CUSTOM_SEARCH_BASE_URL: &str = "https://www.googleapis.com";

/// Project metadata attribute holding the custom search engine id.
pub const SEARCH_CX_ATTRIBUTE: &str = "SEARCH_CX";
/// Project metadata attribute holding the custom search API key.
pub const SEARCH_KEY_ATTRIBUTE: &str = "SEARCH_KEY";
