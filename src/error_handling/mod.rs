//! Error handling: the service-wide error taxonomy.

mod types;

pub use types::{ImageError, InitializationError, LocationError};
