use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::presets::preset_library_entity::PresetLibraryEntity;
use crate::domain::date_range::model::DatePreset;
use crate::domain::preset::dto::preset_library_upsert_request::PresetLibraryUpsertRequest;
use crate::errors::AppError;

pub struct PresetController;

impl PresetController {
    pub async fn list_presets(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<DatePreset>>>, AppError> {
        to_json(state.preset_service.list_presets().await)
    }

    pub async fn calendar_presets(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<DatePreset>>>, AppError> {
        to_json(state.preset_service.calendar_presets().await)
    }

    pub async fn upsert_presets(
        State(state): State<AppState>,
        Json(payload): Json<PresetLibraryUpsertRequest>,
    ) -> Result<Json<ApiResponse<PresetLibraryEntity>>, AppError> {
        to_json(state.preset_service.upsert_presets(payload).await)
    }

    pub async fn reset_presets(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.preset_service.reset_presets().await)
    }
}
