use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use crate::app_state::AppState;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    // Presets, date range and system subrouters live under /api/v1
    let api_v1 = Router::new()
        .merge(crate::api::routes::preset_routes::preset_routes())
        .nest("/date-range", crate::api::routes::date_range_routes::date_range_routes())
        .nest("/system", crate::api::routes::system_routes::system_routes());

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", api_v1)
        .fallback(handler_404)
        // Picker front-ends are served from other origins
        .layer(CorsLayer::very_permissive())
}

async fn root() -> &'static str {
    "Date range service is running!"
}

async fn health_check() -> &'static str {
    "OK"
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
