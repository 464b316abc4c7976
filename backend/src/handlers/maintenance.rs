use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::debug;

use crate::AppState;

/// While maintenance mode is on, every page except "/" redirects to "/".
pub async fn maintenance_gate(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if state.config.maintenance_mode && should_redirect(request.uri().path()) {
        debug!("Maintenance redirect for {}", request.uri().path());
        return Redirect::temporary("/").into_response();
    }

    next.run(request).await
}

pub fn should_redirect(path: &str) -> bool {
    path != "/" && !is_passthrough(path)
}

// The root page still needs its bundle, and the API (health, maintenance status)
// must answer.
fn is_passthrough(path: &str) -> bool {
    if path.starts_with("/api/") {
        return true;
    }
    path.rsplit('/')
        .next()
        .map(|segment| segment.contains('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_root_and_assets_pass() {
        assert!(!should_redirect("/"));
        assert!(should_redirect("/about"));
        assert!(should_redirect("/services/3"));
        assert!(should_redirect("/blog/"));
        assert!(!should_redirect("/shieldline-frontend-1a2b.wasm"));
        assert!(!should_redirect("/assets/logo.svg"));
        assert!(!should_redirect("/api/health"));
        assert!(!should_redirect("/api/maintenance"));
        assert!(should_redirect("/apiary"));
    }
}
