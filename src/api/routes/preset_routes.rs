//! Preset library routes (e.g., /api/v1/presets*)

use axum::{routing::get, Router};
use crate::api::controller::preset::PresetController;
use crate::app_state::AppState;

/// Merged rather than nested so `/presets` itself is a route.
pub fn preset_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/presets",
            get(PresetController::list_presets)
                .put(PresetController::upsert_presets)
                .delete(PresetController::reset_presets),
        )
        .route("/presets/calendar", get(PresetController::calendar_presets))
}
