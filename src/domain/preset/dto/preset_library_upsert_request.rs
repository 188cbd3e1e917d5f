use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::date_range::model::date_preset::CUSTOM_PRESET_ALIAS;
use crate::domain::date_range::model::preset_definition::{MAX_CALENDAR_DAYS_AGO, MAX_LOOKBACK_SECS};
use crate::domain::date_range::model::{Granularity, PresetAnchor, PresetDefinition};

static PRESET_ALIAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]{1,64}$").expect("valid preset alias regex"));

/// Replaces the whole preset library. Order is match priority.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_library"))]
pub struct PresetLibraryUpsertRequest {
    #[validate(nested)]
    pub presets: Vec<PresetDefinitionUpsertRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_anchor"))]
pub struct PresetDefinitionUpsertRequest {
    pub id: Option<u32>,

    #[validate(length(min = 1, max = 100))]
    pub title: String,

    /// Lowercase key, unique within the library. `custom` is reserved.
    #[validate(regex(path = *PRESET_ALIAS), custom(function = "validate_not_reserved"))]
    pub alias: String,

    pub anchor: PresetAnchor,

    pub granularity: Granularity,
}

impl From<PresetDefinitionUpsertRequest> for PresetDefinition {
    fn from(value: PresetDefinitionUpsertRequest) -> Self {
        Self {
            id: value.id,
            title: value.title,
            alias: value.alias,
            anchor: value.anchor,
            granularity: value.granularity,
        }
    }
}

fn validate_library(req: &PresetLibraryUpsertRequest) -> Result<(), ValidationError> {
    if req.presets.is_empty() {
        return Err(ValidationError::new("empty_library"));
    }

    let mut seen = HashSet::new();
    if req.presets.iter().any(|p| !seen.insert(p.alias.as_str())) {
        return Err(ValidationError::new("duplicate_alias"));
    }

    Ok(())
}

fn validate_not_reserved(alias: &str) -> Result<(), ValidationError> {
    if alias == CUSTOM_PRESET_ALIAS {
        return Err(ValidationError::new("reserved_alias"));
    }
    Ok(())
}

fn validate_anchor(req: &PresetDefinitionUpsertRequest) -> Result<(), ValidationError> {
    let valid = match &req.anchor {
        PresetAnchor::Relative { lookback_secs } => (1..=MAX_LOOKBACK_SECS).contains(lookback_secs),
        PresetAnchor::CalendarDays {
            since_days_ago,
            until_days_ago,
        } => since_days_ago >= until_days_ago && *since_days_ago <= MAX_CALENDAR_DAYS_AGO,
        PresetAnchor::Fixed {
            since: Some(since),
            until: Some(until),
        } => since <= until,
        PresetAnchor::Fixed { .. } | PresetAnchor::AllTime => true,
    };

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_anchor"))
    }
}
