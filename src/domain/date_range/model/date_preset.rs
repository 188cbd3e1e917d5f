use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::date_period::DatePeriod;
use super::granularity::Granularity;

pub const CUSTOM_PRESET_ALIAS: &str = "custom";
pub const CUSTOM_PRESET_TITLE: &str = "Custom";

/// Granularity attached to every synthesized custom range.
pub const CUSTOM_PRESET_GRANULARITY: Granularity = Granularity::Hour;

/// A named date range as shown in the picker.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePreset {
    pub id: Option<u32>,
    pub title: String,
    /// Stable key, unique within a preset list.
    pub alias: String,
    pub period: DatePeriod,
    pub granularity: Granularity,
}

impl DatePreset {
    /// Preset synthesized when no library entry matches a period.
    /// It is never written back into a preset list.
    pub fn custom(period: DatePeriod) -> Self {
        Self {
            id: None,
            title: CUSTOM_PRESET_TITLE.to_string(),
            alias: CUSTOM_PRESET_ALIAS.to_string(),
            period,
            granularity: CUSTOM_PRESET_GRANULARITY,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.alias == CUSTOM_PRESET_ALIAS
    }
}
