use axum::extract::DefaultBodyLimit;
use std::env;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docflow::handlers::build_router;
use docflow::middleware::logging_middleware;
use docflow::{AppState, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docflow=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting Docflow Word Document Relay Service");
    tracing::info!("Processing backend: {}", config.backend_url);
    tracing::info!("Max file size: {}MB", config.max_file_size_mb);

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_seconds))
        .build()?;

    // Headroom above the file ceiling covers multipart framing overhead, so
    // oversized uploads reach the handler's FileTooLarge check instead of
    // tripping the transport limit.
    let max_body_bytes = config.max_file_size_mb * 1024 * 1024 + 64 * 1024;
    let state = AppState::new(config.clone(), http);

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(DefaultBodyLimit::max(max_body_bytes))
            .layer(axum::middleware::from_fn(logging_middleware)),
    );

    // Determine port from environment (deployment platform compatibility)
    let port = env::var("PORT")
        .unwrap_or_else(|_| config.server_port.to_string())
        .parse::<u16>()
        .unwrap_or(config.server_port);

    let addr = format!("{}:{}", config.server_host, port);

    tracing::info!("Server listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
