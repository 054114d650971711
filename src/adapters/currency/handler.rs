use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::http::{map_error, AppState, ErrorResponse};

use super::dto::{ConversionResult, CurrencyQuery};
use super::implementation::CURRENCY_UNAVAILABLE;

pub(crate) async fn get_conversion(
    State(state): State<AppState>,
    Query(query): Query<CurrencyQuery>,
) -> Result<Json<ConversionResult>, (StatusCode, Json<ErrorResponse>)> {
    match state.server().currency_adapter().convert(query).await {
        Ok(result) => {
            tracing::info!("Converted {} {}", result.amount, result.base_currency);
            Ok(Json(result))
        }
        Err(err) => Err(map_error(err, CURRENCY_UNAVAILABLE)),
    }
}
