use std::net::SocketAddr;

use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use bluegreen_info::app_info::AppInfo;
use bluegreen_info::config::ServiceConfig;
use bluegreen_info::{routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignored in production where env vars are set externally)
    let _ = dotenvy::dotenv();

    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ServiceConfig::from_env()?;
    info!("Configuration loaded (port={})", config.port);

    // Resolve deployment metadata. A slot started without it still serves
    // /version, just with placeholder values.
    let info = AppInfo::from_env().unwrap_or_else(|e| {
        warn!("Deployment metadata unavailable ({}), serving placeholders", e);
        AppInfo::unknown()
    });
    info!("Serving as {} v{} ({})", info.name, info.version, info.status);

    let state = AppState { info };

    // CORS layer: allow requests from any origin (public informational API)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::router(state).layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Blue-Green Info Service v1.0.0 listening on {}", addr);
    info!("Routes:");
    info!("  GET  /");
    info!("  GET  /health");
    info!("  GET  /version");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
