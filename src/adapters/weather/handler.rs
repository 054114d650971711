use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::http::{map_error, AppState, ErrorResponse};

use super::dto::{WeatherQuery, WeatherReading};
use super::implementation::WEATHER_UNAVAILABLE;

pub(crate) async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherReading>, (StatusCode, Json<ErrorResponse>)> {
    match state.server().weather_adapter().get_weather(query).await {
        Ok(reading) => {
            tracing::info!("Weather served for {}", reading.city);
            Ok(Json(reading))
        }
        Err(err) => Err(map_error(err, WEATHER_UNAVAILABLE)),
    }
}
