//! Static Site Host
//!
//! Serves the built UI bundle with Axum. Client-side routing means any path
//! that is not a file in the bundle gets `index.html` with status 200, so
//! deep links such as `/events` survive a reload.
//!
//! # Endpoints
//!
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Status, version, uptime and bundle directory
//! - everything else - files from `dist_dir`, falling back to the index

pub mod error;
pub mod health;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Build the router with health routes, static files and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(health::liveness))
        .route("/", get(health::full_health));

    let static_files = ServeDir::new(state.dist_dir())
        .fallback(ServeFile::new(state.config.index_path()));

    Router::new()
        .nest("/health", health_routes)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the host and run until Ctrl+C or SIGTERM
pub async fn serve(state: AppState) -> ServerResult<()> {
    if !state.dist_dir().is_dir() {
        return Err(ServerError::MissingBundle(state.dist_dir().to_path_buf()));
    }
    if !state.has_index() {
        tracing::warn!(
            "No {} in {:?}; unknown paths will return 404",
            state.config.index_file,
            state.dist_dir()
        );
    }

    let addr = state.config.socket_addr()?;
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    tracing::info!("Serving site on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Site host shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, ServerConfig};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>site</body></html>";

    fn bundle() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets").join("app.js"), "console.log(1);").unwrap();
        dir
    }

    fn create_test_app(dir: &TempDir) -> Router {
        let config = ServerConfig {
            dist_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        build_router(AppState::new(config))
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_live() {
        let dir = bundle();
        let (status, _) = fetch(create_test_app(&dir), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let dir = bundle();
        let (status, body) = fetch(create_test_app(&dir), "/health").await;
        assert_eq!(status, StatusCode::OK);

        let health: health::HealthResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(health.dist_dir, dir.path().display().to_string());
    }

    #[tokio::test]
    async fn test_health_degraded_without_index() {
        let dir = tempfile::tempdir().unwrap();
        let (_, body) = fetch(create_test_app(&dir), "/health").await;
        let health: health::HealthResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(health.status, "degraded");
    }

    #[tokio::test]
    async fn test_serves_bundle_files() {
        let dir = bundle();
        let (status, body) = fetch(create_test_app(&dir), "/assets/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1);");

        let (status, body) = fetch(create_test_app(&dir), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dir = bundle();
        for path in ["/events", "/team", "/no/such/page"] {
            let (status, body) = fetch(create_test_app(&dir), path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(body, INDEX);
        }
    }

    #[tokio::test]
    async fn test_serve_requires_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            dist_dir: dir.path().join("missing"),
            ..Default::default()
        };
        let result = serve(AppState::new(config)).await;
        assert!(matches!(result, Err(ServerError::MissingBundle(_))));
    }

    #[tokio::test]
    async fn test_serve_rejects_unparseable_host() {
        let dir = bundle();
        let config = ServerConfig {
            host: "not a host".to_string(),
            dist_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let result = serve(AppState::new(config)).await;
        assert!(matches!(
            result,
            Err(ServerError::Config(ConfigError::InvalidValue { key: "server.host", .. }))
        ));
    }
}
