//! System controller: connects routes to system usecases

use axum::extract::State;
use axum::Json;

use crate::api::dto::system_dto::SystemStatusResponse;
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct SystemController;

impl SystemController {
    pub async fn status(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<SystemStatusResponse>>, AppError> {
        to_json(state.system_service.status().await)
    }
}
