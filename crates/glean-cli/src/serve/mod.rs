//! HTTP boundary for concept extraction.
//!
//! Exposes the analyzer as a small JSON API for browser front-ends.
//!
//! # Module Structure
//!
//! - `handlers` - HTTP route handlers and error mapping
//! - `models` - API request/response types (DTOs)
//!
//! # Endpoints
//!
//! - `GET /health` - status and supported languages
//! - `POST /analyze` - extract concepts from a snippet

mod handlers;
mod models;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use color_eyre::eyre::{eyre, WrapErr};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use glean_core::config::ServerConfig;
use glean_core::Analyzer;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state for the server.
pub struct AppState {
    /// Immutable analyzer shared by every request.
    pub analyzer: Arc<Analyzer>,
}

// =============================================================================
// Router
// =============================================================================

/// Build the router with all routes and middleware.
pub fn router(state: Arc<AppState>, config: &ServerConfig) -> color_eyre::Result<Router> {
    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/analyze", post(handlers::analyze))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config)?)
        .with_state(state);

    Ok(app)
}

/// CORS policy from configuration.
///
/// Methods and headers are mirrored from the preflight request, which is
/// the form browsers accept together with credentials.
fn cors_layer(config: &ServerConfig) -> color_eyre::Result<CorsLayer> {
    let origin = if config.allowed_origins.iter().any(|o| o == "*") {
        if config.allow_credentials {
            return Err(eyre!("Wildcard origin cannot be combined with credentials"));
        }
        AllowOrigin::any()
    } else {
        let origins = config
            .allowed_origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .wrap_err_with(|| format!("Invalid CORS origin: {}", o))
            })
            .collect::<color_eyre::Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(config.allow_credentials))
}

// =============================================================================
// Server Entry Point
// =============================================================================

/// Start the HTTP server and run until Ctrl+C.
pub async fn start_server(analyzer: Analyzer, config: &ServerConfig) -> color_eyre::Result<()> {
    let state = Arc::new(AppState {
        analyzer: Arc::new(analyzer),
    });
    let app = router(state, config)?;

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", addr))?;

    tracing::info!(address = %addr, "Glean server listening");
    eprintln!("Glean API: http://{}", addr);
    eprintln!("Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Could not listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cors_layer_builds() {
        assert!(cors_layer(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn test_wildcard_origin_requires_no_credentials() {
        let mut config = ServerConfig {
            allowed_origins: vec!["*".to_string()],
            ..Default::default()
        };
        assert!(cors_layer(&config).is_err());

        config.allow_credentials = false;
        assert!(cors_layer(&config).is_ok());
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let config = ServerConfig {
            allowed_origins: vec!["http://bad\norigin".to_string()],
            ..Default::default()
        };
        assert!(cors_layer(&config).is_err());
    }

    #[tokio::test]
    async fn test_router_builds() {
        let state = Arc::new(AppState {
            analyzer: Arc::new(Analyzer::new()),
        });
        assert!(router(state, &ServerConfig::default()).is_ok());
    }
}
