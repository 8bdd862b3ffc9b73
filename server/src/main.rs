use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod clock;
mod config;
mod engine;
mod provider;
mod routes;
mod utils;

use clock::SystemClock;
use config::Config;
use provider::source_from_config;
use routes::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "event_weather_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let source = source_from_config(&config)?;
    tracing::info!("Using '{}' as the historical weather source", config.weather_provider);

    let bind_addr = config.bind_addr.clone();
    let state = AppState {
        config: Arc::new(config),
        source,
        clock: Arc::new(SystemClock),
    };

    let app = create_router(state).layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server starting on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
