use crate::adapters::{currency, quote, weather};
use crate::error::InfoHubError;
use crate::InfoHubServer;
use anyhow::Result;
use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    middleware,
    response::Response,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    server: Arc<InfoHubServer>,
}

impl AppState {
    pub(crate) fn server(&self) -> &InfoHubServer {
        &self.server
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub port: u16,
}

/// Converts an adapter error into its status and JSON body.
///
/// Client faults keep their own message. Everything else is logged and replaced by
/// `fallback`, so upstream details never reach the browser.
pub(crate) fn map_error(err: InfoHubError, fallback: &str) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        InfoHubError::ConfigError(_) | InfoHubError::ValidationError(_) => StatusCode::BAD_REQUEST,
        InfoHubError::NotFound { .. } => StatusCode::NOT_FOUND,
        InfoHubError::Remote { .. } => StatusCode::BAD_GATEWAY,
        InfoHubError::UpstreamError { .. }
        | InfoHubError::NetworkError(_)
        | InfoHubError::SerializationError(_)
        | InfoHubError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let message = if err.is_client_error() {
        tracing::warn!("Request rejected ({}): {}", status, err);
        err.to_string()
    } else {
        tracing::error!("Request failed ({}): {}", status, err);
        fallback.to_string()
    };

    (status, Json(ErrorResponse { error: message }))
}

async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "Server is running".to_string(),
        timestamp: Utc::now(),
        port: state.server().config().server.port,
    })
}

async fn route_not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Route not found".to_string(),
        }),
    )
}

// The dashboard front end is served from another origin.
async fn allow_any_origin(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

pub fn router(server: InfoHubServer) -> Router {
    let state = AppState {
        server: Arc::new(server),
    };

    Router::new()
        .route("/api/weather", get(weather::get_weather))
        .route("/api/currency", get(currency::get_conversion))
        .route("/api/quote", get(quote::get_quote))
        .route("/api/health", get(health))
        .fallback(route_not_found)
        .layer(middleware::map_response(allow_any_origin))
        .with_state(state)
}

pub async fn run_http_server(server: InfoHubServer) -> Result<()> {
    let addr = format!(
        "{}:{}",
        server.config().server.host,
        server.config().server.port
    );
    let app = router(server);

    tracing::info!("Starting InfoHub HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
