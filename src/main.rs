mod bucketing;
mod config;
mod dashboard;
mod errors;
mod handlers;
mod models;
mod scoring_client;
mod wizard;

use axum::{
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::scoring_client::ScoringClient;

/// Main entry point for the application.
///
/// This function initializes the application, including:
/// - Logging and tracing.
/// - Configuration loading.
/// - The scoring service client.
/// - The in-memory wizard session cache.
/// - HTTP routes and middleware (CORS, Rate Limiting).
///
/// It then starts the Axum server.
///
/// # Returns
///
/// * `anyhow::Result<()>` - Ok if the server runs successfully, or an error if initialization fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finpersona_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    // Initialize scoring service client
    let scoring_client = ScoringClient::new(
        config.scoring_base_url.clone(),
        config.scoring_token.clone(),
    )
    .map_err(|e| anyhow::anyhow!("Failed to initialize scoring client: {}", e))?;
    tracing::info!("✓ Scoring client initialized: {}", config.scoring_base_url);

    // Create wizard session cache. Sessions expire after the configured
    // TTL; abandoned wizards simply vanish, there is no persistence.
    let sessions = Cache::builder()
        .time_to_live(Duration::from_secs(config.session_ttl_secs))
        .max_capacity(100_000)
        .build();
    tracing::info!(
        "Session cache initialized ({}s TTL, 100k capacity)",
        config.session_ttl_secs
    );

    // Build application state
    let app_state = Arc::new(handlers::AppState {
        scoring_client,
        sessions,
    });

    // Configure rate limiter: 10 requests/second per IP, burst of 20
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .unwrap(),
    );

    // Build protected routes with security layers
    let protected_routes = Router::new()
        // Wizard session endpoints
        .route("/api/v1/sessions", post(handlers::start_session))
        .route("/api/v1/sessions/:id", get(handlers::get_session))
        .route("/api/v1/sessions/:id/answers", post(handlers::answer_step))
        .route("/api/v1/sessions/:id/submit", post(handlers::submit_session))
        // Scoring service diagnostic
        .route("/api/v1/scoring/test", get(handlers::scoring_diagnostic))
        .layer(
            ServiceBuilder::new()
                // Request size limit: answers are small, 64KB is generous
                .layer(RequestBodyLimitLayer::new(64 * 1024))
                // Rate limiting: 10 req/sec per IP, burst of 20
                .layer(GovernorLayer {
                    config: governor_conf,
                }),
        );

    // Build final app with health check (bypasses rate limiting)
    let app = Router::new()
        .route("/health", get(handlers::health))
        .merge(protected_routes)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
