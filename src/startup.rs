//! Application startup and lifecycle management.
//!
//! The router is built explicitly here and handed to the server start call;
//! the listener is bound in `build` so tests can bind port 0 and discover
//! the assigned port.

use crate::config::{Config, GreetingSource};
use crate::error::AppError;
use crate::handlers;
use crate::services::providers::fixed::FixedGreeter;
use crate::services::providers::gemini::{GeminiConfig, GeminiGreeter};
use crate::services::providers::GreetingProvider;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub greeter: Arc<dyn GreetingProvider>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: Config) -> Result<Self, AppError> {
        let greeter: Arc<dyn GreetingProvider> = match config.greeting.source {
            GreetingSource::Fixed => {
                tracing::info!("Using fixed greeting message");
                Arc::new(FixedGreeter::new(config.greeting.message.clone()))
            }
            GreetingSource::Gemini => {
                let gemini_config = GeminiConfig {
                    api_key: config.google.api_key.clone(),
                    model: config.models.text_model.clone(),
                    api_base_url: config.models.api_base_url.clone(),
                };

                tracing::info!(
                    model = %config.models.text_model,
                    "Initialized Gemini greeting provider"
                );

                Arc::new(GeminiGreeter::new(gemini_config))
            }
        };

        let allowed_origin = config
            .cors
            .allowed_origin
            .parse::<HeaderValue>()
            .map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "Invalid CORS origin '{}': {}",
                    config.cors.allowed_origin,
                    e
                ))
            })?;

        let state = AppState { greeter };

        let router = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/api/hello", get(handlers::hello))
            .route("/api/data", post(handlers::echo))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                }),
            )
            .layer(
                CorsLayer::new()
                    .allow_origin(allowed_origin)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE]),
            )
            .with_state(state);

        let addr = format!("{}:{}", config.server.host, config.server.port);
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Backend listening on port {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }
}
