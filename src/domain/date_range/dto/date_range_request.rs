use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::date_range::model::{DatePeriod, DatePreset, DateRangeFilter};

/// Resolve a filter against the stored library, or against `presets` when
/// the caller brings its own list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_resolve_request"))]
pub struct ResolveRequest {
    pub filter: Option<DateRangeFilter>,
    pub presets: Option<Vec<DatePreset>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplyPresetRequest {
    #[validate(length(min = 1, max = 64))]
    pub alias: String,
}

/// Raw text from the since/until fields. Invalid text is not rejected, it
/// simply leaves `current` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomRangeRequest {
    pub since: String,
    pub until: String,
    #[serde(default)]
    pub current: Option<DatePeriod>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GranularitySuggestionRequest {
    pub filter: DateRangeFilter,
}

fn validate_resolve_request(req: &ResolveRequest) -> Result<(), ValidationError> {
    let Some(presets) = &req.presets else {
        return Ok(());
    };

    let mut seen = HashSet::new();
    if presets.iter().any(|p| !seen.insert(p.alias.as_str())) {
        return Err(ValidationError::new("duplicate_alias"));
    }
    Ok(())
}
