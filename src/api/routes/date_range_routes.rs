//! Date range routes (e.g., /api/v1/date-range/*)

use axum::{routing::post, Router};
use crate::api::controller::date_range::DateRangeController;
use crate::app_state::AppState;

pub fn date_range_routes() -> Router<AppState> {
    Router::new()
        .route("/resolve", post(DateRangeController::resolve))
        .route("/apply", post(DateRangeController::apply_preset))
        .route("/custom", post(DateRangeController::custom_range))
        .route("/granularity", post(DateRangeController::suggest_granularity))
}
