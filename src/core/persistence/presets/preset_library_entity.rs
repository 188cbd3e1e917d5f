use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::date_range::model::PresetDefinition;
use crate::domain::date_range::service::preset_catalog::default_preset_definitions;
use crate::domain::preset::dto::preset_library_upsert_request::PresetLibraryUpsertRequest;

pub const PRESET_LIBRARY_VERSION: &str = "1.0.0";

/// Operator supplied replacement for the built-in "Last N" presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetLibraryEntity {
    /// Ordered by match priority, narrowest first.
    pub presets: Vec<PresetDefinition>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: String,
}

impl PresetLibraryEntity {
    /// Built-in presets stamped with `now`.
    pub fn built_in(now: DateTime<Utc>) -> Self {
        Self {
            presets: default_preset_definitions(),
            created_at: now,
            updated_at: now,
            version: PRESET_LIBRARY_VERSION.into(),
        }
    }

    pub fn apply_update(&mut self, req: PresetLibraryUpsertRequest, now: DateTime<Utc>) {
        self.presets = req.presets.into_iter().map(PresetDefinition::from).collect();
        self.updated_at = now;
        self.version = PRESET_LIBRARY_VERSION.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn built_in_library_is_stamped_with_given_instant() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let library = PresetLibraryEntity::built_in(now);

        assert_eq!(library.created_at, now);
        assert_eq!(library.updated_at, now);
        assert_eq!(library.presets.len(), 9);
    }
}
