//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, timeouts, defaults)
//! - CLI option types and parsing
//! - The library-level `Config` struct

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt};
