use std::sync::Arc;

use crate::core::clock::{Clock, SystemClock};
use crate::core::config::AppConfig;
use crate::core::persistence::presets::preset_library_repository::PresetLibraryRepository;
use crate::domain::date_range::service::date_range_resolver::DateRangeResolver;
use crate::domain::date_range::service::date_range_service::DateRangeService;
use crate::domain::preset::service::preset_library_service::PresetLibraryService;
use crate::domain::system::service::status_service::SystemService;

/// Everything a request handler may touch. Built once at startup and
/// cloned into each handler; there are no process-wide singletons.
#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
    pub preset_service: Arc<PresetLibraryService<PresetLibraryRepository>>,
    pub date_range_service: Arc<DateRangeService<PresetLibraryRepository>>,
    pub system_service: Arc<SystemService<PresetLibraryRepository>>,
}

pub fn build_app_state(config: &AppConfig) -> AppState {
    build_app_state_with_clock(config, Arc::new(SystemClock))
}

pub fn build_app_state_with_clock(config: &AppConfig, clock: Arc<dyn Clock>) -> AppState {
    let preset_service = Arc::new(PresetLibraryService::new(
        PresetLibraryRepository::new(&config.data_dir, clock.clone()),
        clock.clone(),
    ));

    AppState {
        date_range_service: Arc::new(DateRangeService::new(
            DateRangeResolver::new(clock.clone()),
            preset_service.clone(),
        )),
        system_service: Arc::new(SystemService::new(clock.clone(), preset_service.clone())),
        preset_service,
        clock,
    }
}
