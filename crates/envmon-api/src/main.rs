use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use envmon_api::router::create_router;
use envmon_api::{ApiConfig, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "envmon_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env();

    tracing::info!(port = config.port, cors_origin = %config.cors_origin, "Starting Envmon API server");

    let state = Arc::new(AppState::new());

    let cors = match config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET])
            .allow_headers([header::CONTENT_TYPE]),
        Err(_) => {
            tracing::error!(origin = %config.cors_origin, "Invalid ENVMON_CORS_ORIGIN value");
            std::process::exit(1);
        }
    };

    let app = create_router(state).layer(TraceLayer::new_for_http()).layer(cors);

    let addr = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!("Listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
