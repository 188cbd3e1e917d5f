pub mod custom_range_editor;
pub mod date_input;
pub mod date_range_picker;
pub mod date_range_resolver;
pub mod date_range_service;
pub mod granularity_suggestion;
pub mod preset_catalog;
