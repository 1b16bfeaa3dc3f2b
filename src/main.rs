use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use gemini_relay::{create_router, AppState, UpstreamClient};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration from environment
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse()
        .expect("PORT must be a number");
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "./static".to_string());
    let api_key = std::env::var("GEMINI_API_KEY").ok();
    let api_base = std::env::var("GEMINI_API_BASE").ok();

    if api_key.as_deref().map_or(true, str::is_empty) {
        tracing::warn!("GEMINI_API_KEY is not set; proxy routes will fail until it is configured");
    }

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Invalid address");

    tracing::info!("Gemini Relay v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Static directory: {}", static_dir);

    // Create upstream client
    let upstream = UpstreamClient::new(api_key, api_base);

    // Create app state
    let state = Arc::new(AppState { upstream });

    // Create router
    let app = create_router(state, &static_dir);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
