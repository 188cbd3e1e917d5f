//! Date range value types shared by the resolver, the picker and the API.

pub mod date_period;
pub mod date_preset;
pub mod date_range_filter;
pub mod granularity;
pub mod preset_definition;

pub use date_period::DatePeriod;
pub use date_preset::DatePreset;
pub use date_range_filter::DateRangeFilter;
pub use granularity::Granularity;
pub use preset_definition::{PresetAnchor, PresetDefinition};
