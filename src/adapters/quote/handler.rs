use axum::{extract::State, http::StatusCode, Json};

use crate::http::{map_error, AppState, ErrorResponse};

use super::dto::Quote;
use super::implementation::QUOTE_UNAVAILABLE;

pub(crate) async fn get_quote(
    State(state): State<AppState>,
) -> Result<Json<Quote>, (StatusCode, Json<ErrorResponse>)> {
    state
        .server()
        .quote_adapter()
        .get_quote()
        .await
        .map(Json)
        .map_err(|err| map_error(err, QUOTE_UNAVAILABLE))
}
