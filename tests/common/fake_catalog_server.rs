//! Fake catalog HTTP server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves:
//! - `GET /pokemon.json`: the configured catalog body
//! - `GET /missing.json`: always `404 Not Found`
//!
//! # Example
//!
//! ```rust,no_run
//! let server = FakeCatalogServer::start(SAMPLE_JSON).await.unwrap();
//! let source = CatalogSource::parse(&server.url("pokemon.json"));
//! ```

use axum::{extract::State, http::StatusCode, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Handle to the running fake catalog server.
pub struct FakeCatalogServer {
    addr: SocketAddr,
}

impl FakeCatalogServer {
    /// Start serving `body` on a random port. Returns once the server is
    /// listening.
    pub async fn start(body: impl Into<String>) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let body: Arc<str> = body.into().into();

        let app = Router::new()
            .route("/pokemon.json", get(serve_catalog))
            .route("/missing.json", get(|| async { StatusCode::NOT_FOUND }))
            .with_state(body);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr })
    }

    /// Full URL of `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}/{}", self.addr, path.trim_start_matches('/'))
    }
}

async fn serve_catalog(State(body): State<Arc<str>>) -> String {
    body.to_string()
}
