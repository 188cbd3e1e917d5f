use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::domain::date_range::model::{DatePeriod, DatePreset, DateRangeFilter, Granularity};
use crate::domain::date_range::service::custom_range_editor::DateInputs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomRangeResponse {
    pub period: DatePeriod,
    pub filter: DateRangeFilter,
    /// Preset the new period resolves to, usually `custom`.
    pub preset: DatePreset,
    pub inputs: DateInputs,
    pub since_committed: bool,
    pub until_committed: bool,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GranularitySuggestionResponse {
    pub suggestion: Option<Granularity>,
}
