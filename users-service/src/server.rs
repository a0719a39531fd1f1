//! HTTP server with graceful shutdown

use axum::{extract::DefaultBodyLimit, Router};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{
    config::Config,
    error::Result,
    middleware::{
        cors_layer, request_id_layer, request_id_propagation_layer, sensitive_headers_layer,
    },
    routes::API_BASE_PATH,
};

/// Server instance
pub struct Server {
    config: Config,
}

impl Server {
    /// Create a new server instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Wrap `app` in the middleware stack
    ///
    /// Each `layer` call wraps everything added before it, so the stack
    /// reads innermost first: panic recovery, tracing, header masking,
    /// request ids, body limit, timeout, and CORS outermost.
    pub fn apply_middleware(&self, app: Router) -> Router {
        let middleware = &self.config.middleware;
        let mut app = app;

        if middleware.catch_panic {
            app = app.layer(CatchPanicLayer::new());
        }

        app = app
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().include_headers(true))
                    .on_response(DefaultOnResponse::new().include_headers(true)),
            )
            .layer(sensitive_headers_layer())
            .layer(request_id_propagation_layer())
            .layer(request_id_layer())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(body_limit_bytes(middleware.body_limit_mb)))
            .layer(TimeoutLayer::with_status_code(
                http::StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(self.config.service.timeout_secs),
            ));

        if let Some(cors) = cors_layer(&middleware.cors_mode) {
            app = app.layer(cors);
        }

        app
    }

    /// Run the server with the given router
    ///
    /// Returns an error if the listen socket cannot be bound.
    pub async fn serve(self, app: Router) -> Result<()> {
        let addr = self.config.listen_addr();
        let port = self.config.service.port;

        self.log_middleware_config();
        let app = self.apply_middleware(app);

        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server starting on port {}", port);
        tracing::info!(
            "Health check available at: http://localhost:{}{}/health",
            port,
            API_BASE_PATH
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    /// Log middleware configuration for debugging
    fn log_middleware_config(&self) {
        let middleware = &self.config.middleware;
        tracing::info!(
            service = %self.config.service.name,
            environment = %self.config.service.environment,
            "Middleware configuration:"
        );
        tracing::info!("  - Panic recovery: {}", middleware.catch_panic);
        tracing::info!("  - Request ID tracking: enabled");
        tracing::info!("  - Sensitive header masking: enabled");
        tracing::info!("  - Request body limit: {} MB", middleware.body_limit_mb);
        tracing::info!("  - CORS mode: {}", middleware.cors_mode);
        tracing::info!(
            "  - Request timeout: {} seconds",
            self.config.service.timeout_secs
        );
    }
}

/// Convert the configured limit to bytes, saturating on overflow
fn body_limit_bytes(megabytes: usize) -> usize {
    megabytes.saturating_mul(1024 * 1024)
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
        _ = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl+C), starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }

    tracing::info!("Shutdown signal received, draining requests...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_server_creation() {
        let config = Config::default();
        let server = Server::new(config.clone());
        assert_eq!(server.config().service.port, config.service.port);
    }

    #[test]
    fn test_body_limit_bytes_saturates() {
        assert_eq!(body_limit_bytes(10), 10 * 1024 * 1024);
        assert_eq!(body_limit_bytes(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_apply_middleware_with_huge_body_limit() {
        let mut config = Config::default();
        config.middleware.body_limit_mb = usize::MAX;
        let _app = Server::new(config).apply_middleware(Router::new());
    }

    #[tokio::test]
    async fn test_serve_fails_when_port_taken() {
        let occupied = TcpListener::bind("0.0.0.0:0").await.unwrap();
        let mut config = Config::default();
        config.service.port = occupied.local_addr().unwrap().port();

        let result = Server::new(config).serve(Router::new()).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
