use dotenvy::dotenv;
use axum::{
    extract::State,
    routing::get,
    Json,
    Router,
    middleware
};
use serde::Serialize;
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod config;
mod handlers {
    pub mod maintenance;
}

use config::ServerConfig;
use handlers::maintenance;


async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    config: ServerConfig,
}

#[derive(Serialize)]
pub struct MaintenanceStatus {
    maintenance: bool,
}

/// The client asks this before rendering, so client-side navigation obeys the
/// same switch as the redirect middleware.
async fn maintenance_status(State(state): State<Arc<AppState>>) -> Json<MaintenanceStatus> {
    Json(MaintenanceStatus {
        maintenance: state.config.maintenance_mode,
    })
}

/// API routes plus the frontend bundle. Unknown paths get `index.html` so the
/// client router can resolve them.
pub fn app(state: Arc<AppState>) -> Router {
    let static_dir = &state.config.static_dir;
    let spa = ServeDir::new(static_dir)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/maintenance", get(maintenance_status))
        .fallback_service(spa)
        .layer(middleware::from_fn_with_state(state.clone(), maintenance::maintenance_gate))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    info!(
        "Serving {} on {} (maintenance mode: {})",
        config.static_dir.display(),
        config.bind_addr,
        config.maintenance_mode
    );

    let bind_addr = config.bind_addr;
    let state = Arc::new(AppState { config });

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app(maintenance_mode: bool) -> (Router, tempfile::TempDir) {
        let dist = tempfile::tempdir().unwrap();
        std::fs::write(dist.path().join("index.html"), "home page").unwrap();
        std::fs::write(dist.path().join("app.js"), "console.log(1)").unwrap();
        let config = ServerConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            static_dir: dist.path().to_path_buf(),
            maintenance_mode,
        };
        (app(Arc::new(AppState { config })), dist)
    }

    async fn get_path(app: Router, path: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn maintenance_redirects_every_page_to_root() {
        for path in ["/about", "/blog", "/blog/what-a-porter-does", "/services/1", "/contact"] {
            let (app, _dist) = test_app(true);
            let response = get_path(app, path).await;
            assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{}", path);
            assert_eq!(response.headers()[header::LOCATION], "/");
        }
    }

    #[tokio::test]
    async fn maintenance_serves_root_unmodified() {
        let (app, _dist) = test_app(true);
        let response = get_path(app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"home page");
    }

    #[tokio::test]
    async fn health_passes_through_gate() {
        let (app, _dist) = test_app(true);
        let response = get_path(app, "/api/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn maintenance_status_reports_flag_through_gate() {
        for (maintenance_mode, expected) in [
            (true, r#"{"maintenance":true}"#),
            (false, r#"{"maintenance":false}"#),
        ] {
            let (app, _dist) = test_app(maintenance_mode);
            let response = get_path(app, "/api/maintenance").await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
            let body = response.into_body().collect().await.unwrap().to_bytes();
            assert_eq!(&body[..], expected.as_bytes());
        }
    }

    #[tokio::test]
    async fn bundle_files_pass_through_gate() {
        let (app, _dist) = test_app(true);
        let response = get_path(app, "/app.js").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_pages_fall_back_to_index_without_maintenance() {
        let (app, _dist) = test_app(false);
        let response = get_path(app, "/services/2").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"home page");
    }
}
