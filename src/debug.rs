use tracing::info;

use crate::app_state::AppState;
use crate::domain::date_range::dto::date_range_request::ResolveRequest;
use crate::domain::date_range::service::date_range_resolver::apply_preset;

/// Runs only when in DATERANGE_DEBUG_MODE
pub async fn run_debug(state: &AppState) -> anyhow::Result<()> {
    info!("🔧 Debug mode: resolving the preset library...");
    info!(now = %state.clock.now(), source = ?state.preset_service.source(), "Clock and preset source");

    for preset in state.preset_service.list_presets().await? {
        let applied = apply_preset(&preset);
        let resolved = state
            .date_range_service
            .resolve(ResolveRequest {
                filter: Some(applied.filter.clone()),
                presets: None,
            })
            .await?;

        info!(
            alias = %preset.alias,
            granularity = %applied.granularity,
            filter = ?applied.filter,
            resolves_to = %resolved.alias,
            "Preset"
        );
    }

    info!("Debug tasks completed. Exiting...");
    Ok(())
}
