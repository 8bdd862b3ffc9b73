use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::{
    clock::Clock,
    config::Config,
    engine::{assess, EngineError, WeatherQuery, WeatherRequest, WeatherResult},
    provider::HistoricalWeatherSource,
    utils::ErrorResponse,
};

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub source: Arc<dyn HistoricalWeatherSource>,
    pub clock: Arc<dyn Clock>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
    pub provider: String,
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        match self {
            EngineError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(&message, "VALIDATION_ERROR")),
            )
                .into_response(),
            other => {
                tracing::error!("Error fetching weather data: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Failed to fetch weather data", "UPSTREAM_ERROR")),
                )
                    .into_response()
            }
        }
    }
}

// Route handlers
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: state.clock.now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: state.config.weather_provider.clone(),
    })
}

pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherQuery>,
) -> Result<Json<WeatherResult>, EngineError> {
    let request = WeatherRequest::from_query(&params)?;
    let result = assess(state.source.as_ref(), state.clock.as_ref(), request).await?;
    Ok(Json(result))
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/weather", get(get_weather))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
