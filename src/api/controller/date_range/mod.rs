//! Date range controller: connects routes to the resolver usecases

use axum::extract::State;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::date_range::dto::date_range_request::{
    ApplyPresetRequest, CustomRangeRequest, GranularitySuggestionRequest, ResolveRequest,
};
use crate::domain::date_range::dto::date_range_response::{CustomRangeResponse, GranularitySuggestionResponse};
use crate::domain::date_range::model::DatePreset;
use crate::domain::date_range::service::date_range_resolver::AppliedPreset;
use crate::errors::AppError;

pub struct DateRangeController;

impl DateRangeController {
    pub async fn resolve(
        State(state): State<AppState>,
        Json(payload): Json<ResolveRequest>,
    ) -> Result<Json<ApiResponse<DatePreset>>, AppError> {
        to_json(state.date_range_service.resolve(payload).await)
    }

    pub async fn apply_preset(
        State(state): State<AppState>,
        Json(payload): Json<ApplyPresetRequest>,
    ) -> Result<Json<ApiResponse<AppliedPreset>>, AppError> {
        to_json(state.date_range_service.apply_preset(payload).await)
    }

    pub async fn custom_range(
        State(state): State<AppState>,
        Json(payload): Json<CustomRangeRequest>,
    ) -> Result<Json<ApiResponse<CustomRangeResponse>>, AppError> {
        to_json(state.date_range_service.custom_range(payload).await)
    }

    pub async fn suggest_granularity(
        State(state): State<AppState>,
        Json(payload): Json<GranularitySuggestionRequest>,
    ) -> Result<Json<ApiResponse<GranularitySuggestionResponse>>, AppError> {
        to_json(state.date_range_service.suggest_granularity(payload).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::build_app_state_with_clock;
    use crate::core::clock::FixedClock;
    use crate::core::config::AppConfig;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn state(dir: &TempDir) -> AppState {
        let config = AppConfig {
            server_addr: "127.0.0.1:0".parse().unwrap(),
            data_dir: dir.path().to_path_buf(),
            log_dir: dir.path().join("logs"),
            log_level: "debug".into(),
            debug_mode: false,
        };
        build_app_state_with_clock(&config, Arc::new(FixedClock::new(t0())))
    }

    #[tokio::test]
    async fn resolve_returns_matching_preset() {
        let dir = TempDir::new().unwrap();
        let req: ResolveRequest = serde_json::from_value(serde_json::json!({
            "filter": { "gte": (t0() - Duration::hours(24)).to_rfc3339() }
        }))
        .unwrap();

        let Json(res) = DateRangeController::resolve(State(state(&dir)), Json(req)).await.unwrap();
        let preset = res.data.unwrap();
        assert!(res.is_successful);
        assert_eq!(preset.title, "Last 24 Hours");
    }

    #[tokio::test]
    async fn resolve_far_past_day_is_custom() {
        let dir = TempDir::new().unwrap();
        let req: ResolveRequest = serde_json::from_value(serde_json::json!({
            "filter": { "gte": "2024-01-01T00:00:00Z", "lte": "2024-01-01T00:00:00Z" }
        }))
        .unwrap();

        let Json(res) = DateRangeController::resolve(State(state(&dir)), Json(req)).await.unwrap();
        let preset = res.data.unwrap();
        assert_eq!(preset.alias, "custom");
        assert_eq!(serde_json::to_value(preset.granularity).unwrap(), "hour");
    }

    #[tokio::test]
    async fn unknown_preset_maps_to_404() {
        let dir = TempDir::new().unwrap();
        let req = ApplyPresetRequest { alias: "last_century".into() };

        let err = DateRangeController::apply_preset(State(state(&dir)), Json(req)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn empty_alias_maps_to_400() {
        let dir = TempDir::new().unwrap();
        let req = ApplyPresetRequest { alias: String::new() };

        let err = DateRangeController::apply_preset(State(state(&dir)), Json(req)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn invalid_custom_text_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let req = CustomRangeRequest {
            since: "yesterday".into(),
            until: "2024-99-99".into(),
            current: None,
        };

        let Json(res) = DateRangeController::custom_range(State(state(&dir)), Json(req)).await.unwrap();
        let data = res.data.unwrap();
        assert!(!data.since_committed);
        assert!(!data.until_committed);
    }
}
