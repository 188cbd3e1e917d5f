use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::api::dto::system_dto::SystemStatusResponse;
use crate::core::clock::Clock;
use crate::core::persistence::presets::preset_library_api_repository_trait::PresetLibraryApiRepository;
use crate::domain::preset::service::preset_library_service::PresetLibraryService;

pub struct SystemService<R: PresetLibraryApiRepository> {
    started_at: DateTime<Utc>,
    clock: Arc<dyn Clock>,
    presets: Arc<PresetLibraryService<R>>,
}

impl<R: PresetLibraryApiRepository> SystemService<R> {
    pub fn new(clock: Arc<dyn Clock>, presets: Arc<PresetLibraryService<R>>) -> Self {
        Self {
            started_at: clock.now(),
            clock,
            presets,
        }
    }

    pub async fn status(&self) -> Result<SystemStatusResponse> {
        let now = self.clock.now();
        let (library, preset_source) = self.presets.load();

        Ok(SystemStatusResponse {
            version: env!("CARGO_PKG_VERSION"),
            started_at: self.started_at,
            uptime_secs: (now - self.started_at).num_seconds(),
            preset_source,
            preset_count: library.presets.len(),
        })
    }
}
