use std::sync::Arc;

use anyhow::Result;
use tracing::debug;
use validator::Validate;

use crate::core::persistence::presets::preset_library_api_repository_trait::PresetLibraryApiRepository;
use crate::domain::date_range::dto::date_range_request::{
    ApplyPresetRequest, CustomRangeRequest, GranularitySuggestionRequest, ResolveRequest,
};
use crate::domain::date_range::dto::date_range_response::{CustomRangeResponse, GranularitySuggestionResponse};
use crate::domain::date_range::model::DatePreset;
use crate::domain::preset::service::preset_library_service::PresetLibraryService;
use crate::errors::AppError;

use super::custom_range_editor::CustomRangeEditor;
use super::date_range_resolver::{AppliedPreset, DateRangeResolver};
use super::granularity_suggestion::suggest_granularity;

/// Request level entry point for the resolver, backed by the preset library.
pub struct DateRangeService<R: PresetLibraryApiRepository> {
    resolver: DateRangeResolver,
    presets: Arc<PresetLibraryService<R>>,
}

impl<R: PresetLibraryApiRepository> DateRangeService<R> {
    pub fn new(resolver: DateRangeResolver, presets: Arc<PresetLibraryService<R>>) -> Self {
        Self { resolver, presets }
    }

    pub async fn resolve(&self, req: ResolveRequest) -> Result<DatePreset> {
        req.validate().map_err(AppError::from)?;

        let presets = match req.presets {
            Some(presets) => presets,
            None => self.presets.list_presets().await?,
        };

        Ok(self.resolver.find_matching_preset(req.filter.as_ref(), &presets))
    }

    /// Looks the alias up in the library first, then in the calendar catalog.
    pub async fn apply_preset(&self, req: ApplyPresetRequest) -> Result<AppliedPreset> {
        req.validate().map_err(AppError::from)?;

        let library = self.presets.list_presets().await?;
        let calendar = self.presets.calendar_presets().await?;

        let preset = library
            .iter()
            .chain(calendar.iter())
            .find(|p| p.alias == req.alias)
            .ok_or_else(|| AppError::NotFound(format!("preset '{}'", req.alias)))?;

        debug!(alias = %preset.alias, "Applying preset");
        Ok(self.resolver.apply_preset(preset))
    }

    pub async fn custom_range(&self, req: CustomRangeRequest) -> Result<CustomRangeResponse> {
        let mut editor = CustomRangeEditor::new(req.current.unwrap_or_default());
        let since = editor.edit_since(&req.since);
        let until = editor.edit_until(&req.until);

        let filter = editor.to_filter();
        let presets = self.presets.list_presets().await?;
        let preset = self.resolver.find_matching_preset(Some(&filter), &presets);

        Ok(CustomRangeResponse {
            period: editor.period(),
            filter,
            preset,
            inputs: editor.inputs().clone(),
            since_committed: since.committed,
            until_committed: until.committed,
        })
    }

    pub async fn suggest_granularity(
        &self,
        req: GranularitySuggestionRequest,
    ) -> Result<GranularitySuggestionResponse> {
        Ok(GranularitySuggestionResponse {
            suggestion: suggest_granularity(&req.filter, self.resolver.now()),
        })
    }
}
