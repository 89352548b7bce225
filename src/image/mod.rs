//! Image enrichment: search credentials and the image lookup service.

mod config;
mod lookup;

pub use config::{resolve_search_config, ImageSearchConfig};
pub use lookup::ImageLookupService;
