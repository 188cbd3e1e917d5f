//! System API DTOs
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::preset::service::preset_library_service::PresetSource;

#[derive(Debug, Serialize)]
pub struct SystemStatusResponse {
    pub version: &'static str,
    pub started_at: DateTime<Utc>,
    pub uptime_secs: i64,
    pub preset_source: PresetSource,
    pub preset_count: usize,
}
