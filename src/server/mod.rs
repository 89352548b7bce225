//! HTTP server: routes, handlers, and the HTML view.
//!
//! Deliberately thin. The handlers delegate to [`model::assemble`] and the
//! only contract they add is "the page always renders": full, location-only,
//! or the unknown-location message, never an HTTP error status.

mod model;

pub use model::{assemble, RenderModel};

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use crate::image::ImageLookupService;
use crate::location::LocationCache;

/// Shared per-process state handed to the handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cached location outcome (resolved at most once per process).
    pub location: Arc<LocationCache>,
    /// Best-effort image enrichment.
    pub images: Arc<ImageLookupService>,
}

/// Builds the router. Separate from serving so tests can drive it directly
/// with `tower::ServiceExt::oneshot`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ping", get(ping))
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let model = assemble(&state.location, &state.images).await;
    HtmlTemplate(IndexTemplate { model })
}

async fn ping() -> &'static str {
    "pong"
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    model: Option<RenderModel>,
}

/// Renders an askama template as an HTML response.
struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template. Error: {err}"),
            )
                .into_response(),
        }
    }
}
