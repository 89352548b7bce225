//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the shared HTTP client used for every upstream call.
///
/// Creates a `reqwest::Client` configured with:
/// - A bounded per-request timeout from `Config` (applies to all four
///   upstream services; a timed-out call behaves like any transport failure
///   and triggers the resolver fallback)
/// - A service User-Agent header
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(concat!("whereami/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_default_config() {
        let client = init_client(&Config::default());
        assert!(client.is_ok());
    }
}
