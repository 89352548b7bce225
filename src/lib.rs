//! whereami library: location-aware demo web service.
//!
//! Works out where the process (or its visitor) is located by trying a chain
//! of increasingly generic sources — cloud instance metadata first, then a
//! public-IP geolocation lookup — optionally fetches one public-domain image
//! of the resolved place, and renders the answer as a single HTML page.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use whereami::config::Config;
//! use whereami::image::ImageLookupService;
//! use whereami::initialization::init_client;
//! use whereami::location::{LocationCache, LocationPipeline};
//! use whereami::server::{app, AppState};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let client = init_client(&config)?;
//!
//! let state = AppState {
//!     location: Arc::new(LocationCache::new(LocationPipeline::for_config(&client, &config))),
//!     images: Arc::new(ImageLookupService::new(
//!         client.clone(),
//!         config.custom_search_base_url.clone(),
//!         None,
//!     )),
//! };
//!
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app(state)).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error_handling;
pub mod geo;
pub mod image;
pub mod initialization;
pub mod location;
pub mod server;

// Re-export the types most callers need.
pub use config::{Config, Opt};
pub use error_handling::{ImageError, LocationError};
pub use geo::Geo;
pub use location::{LocationCache, LocationOutcome, LocationPipeline, LocationResolver};
pub use server::{app, AppState, RenderModel};
