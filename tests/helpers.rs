// Shared test helpers for spinning up stub upstream services.
//
// The real service talks to four external HTTP endpoints (instance metadata,
// IP echo, geo-IP, image search). Tests stand in local axum routers for
// whichever of those a scenario needs and point `Config`'s base-URL fields
// at them.

use axum::Router;
use tokio::net::TcpListener;

/// Serves `router` on an ephemeral localhost port in the background and
/// returns the base URL clients should use.
#[allow(dead_code)] // Used by other test files
pub async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Failed to read stub address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Stub server failed");
    });
    format!("http://{addr}")
}

/// Returns a base URL where nothing is listening, for simulating an
/// unreachable upstream. Binds and immediately releases an ephemeral port so
/// connections to it are refused.
#[allow(dead_code)] // Used by other test files
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind throwaway listener");
    let addr = listener
        .local_addr()
        .expect("Failed to read throwaway address");
    drop(listener);
    format!("http://{addr}")
}
