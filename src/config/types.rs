//! Configuration types and CLI options.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    CUSTOM_SEARCH_BASE_URL, DEFAULT_PORT, HTTP_TIMEOUT_SECS, IPIFY_URL, IP_API_BASE_URL,
    METADATA_BASE_URL,
};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options (the CLI surface of the service).
#[derive(Parser, Debug)]
#[command(
    name = "whereami",
    about = "Web service that works out where it is running and shows it on a page"
)]
pub struct Opt {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Per-upstream-call timeout in seconds
    #[arg(long, default_value_t = HTTP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Google Custom Search engine id (falls back to instance metadata)
    #[arg(long, env = "SEARCH_CX")]
    pub search_cx: Option<String>,

    /// Google Custom Search API key (falls back to instance metadata)
    #[arg(long, env = "SEARCH_KEY")]
    pub search_key: Option<String>,
}

/// Library configuration (no CLI dependencies).
///
/// Can be constructed programmatically; the upstream base URLs are plain
/// fields so integration tests can substitute local stub servers.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on
    pub port: u16,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-upstream-call timeout in seconds
    pub timeout_seconds: u64,

    /// Explicitly configured custom search engine id, if any
    pub search_cx: Option<String>,

    /// Explicitly configured custom search API key, if any
    pub search_key: Option<String>,

    /// Instance metadata server base URL
    pub metadata_base_url: String,

    /// Public IP echo service URL
    pub ipify_url: String,

    /// Geo-IP lookup service base URL
    pub ip_api_base_url: String,

    /// Image search API base URL
    pub custom_search_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: HTTP_TIMEOUT_SECS,
            search_cx: None,
            search_key: None,
            metadata_base_url: METADATA_BASE_URL.to_string(),
            ipify_url: IPIFY_URL.to_string(),
            ip_api_base_url: IP_API_BASE_URL.to_string(),
            custom_search_base_url: CUSTOM_SEARCH_BASE_URL.to_string(),
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Config {
            port: opt.port,
            log_level: opt.log_level,
            log_format: opt.log_format,
            timeout_seconds: opt.timeout_seconds,
            search_cx: opt.search_cx,
            search_key: opt.search_key,
            ..Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.timeout_seconds, HTTP_TIMEOUT_SECS);
        assert!(config.search_cx.is_none());
        assert!(config.search_key.is_none());
    }

    #[test]
    fn test_opt_to_config_carries_cli_values() {
        let opt = Opt::parse_from([
            "whereami",
            "--port",
            "9090",
            "--search-cx",
            "engine-id",
            "--search-key",
            "secret",
        ]);
        let config = Config::from(opt);
        assert_eq!(config.port, 9090);
        assert_eq!(config.search_cx.as_deref(), Some("engine-id"));
        assert_eq!(config.search_key.as_deref(), Some("secret"));
        // Endpoints keep their production defaults.
        assert_eq!(config.ipify_url, IPIFY_URL);
    }
}
