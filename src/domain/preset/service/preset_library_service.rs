use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{info, warn};
use validator::Validate;

use crate::core::clock::Clock;
use crate::core::persistence::presets::preset_library_api_repository_trait::PresetLibraryApiRepository;
use crate::core::persistence::presets::preset_library_entity::PresetLibraryEntity;
use crate::domain::date_range::model::preset_definition::materialize_all;
use crate::domain::date_range::model::DatePreset;
use crate::domain::date_range::service::preset_catalog::calendar_presets;
use crate::domain::preset::dto::preset_library_upsert_request::PresetLibraryUpsertRequest;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetSource {
    Stored,
    BuiltIn,
    /// A stored library exists but could not be read.
    BuiltInFallback,
}

/// Owns the preset library and materializes it against the injected clock.
pub struct PresetLibraryService<R: PresetLibraryApiRepository> {
    repo: R,
    clock: Arc<dyn Clock>,
}

impl<R: PresetLibraryApiRepository> PresetLibraryService<R> {
    pub fn new(repo: R, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Current library together with where it came from. An unreadable
    /// stored library is replaced by the built-in one.
    pub fn load(&self) -> (PresetLibraryEntity, PresetSource) {
        match self.repo.read() {
            Ok(library) if self.repo.is_stored() => (library, PresetSource::Stored),
            Ok(library) => (library, PresetSource::BuiltIn),
            Err(err) => {
                warn!(error = %format!("{err:#}"), "Preset library unreadable, serving built-in presets");
                (PresetLibraryEntity::built_in(self.clock.now()), PresetSource::BuiltInFallback)
            }
        }
    }

    pub fn source(&self) -> PresetSource {
        self.load().1
    }

    pub fn library(&self) -> PresetLibraryEntity {
        self.load().0
    }

    pub async fn list_presets(&self) -> Result<Vec<DatePreset>> {
        Ok(materialize_all(&self.library().presets, self.clock.now()))
    }

    pub async fn calendar_presets(&self) -> Result<Vec<DatePreset>> {
        Ok(calendar_presets(self.clock.now()))
    }

    pub async fn upsert_presets(&self, req: PresetLibraryUpsertRequest) -> Result<PresetLibraryEntity> {
        req.validate().map_err(AppError::from)?;

        let (mut library, source) = self.load();
        library.apply_update(req, self.clock.now());
        match source {
            PresetSource::BuiltIn => self.repo.insert(&library)?,
            PresetSource::Stored | PresetSource::BuiltInFallback => self.repo.update(&library)?,
        }

        info!(count = library.presets.len(), "Preset library updated");
        Ok(library)
    }

    pub async fn reset_presets(&self) -> Result<Value> {
        self.repo.delete()?;
        info!("Preset library reset to built-in presets");

        Ok(json!({
            "message": "Preset library reset to built-in presets",
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::persistence::fixed_fs_adapter_trait::FixedFsAdapterTrait;
    use crate::domain::date_range::model::PresetAnchor;
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockPresetLibraryAdapter {
        state: Mutex<Option<PresetLibraryEntity>>,
        corrupt: bool,
    }

    impl FixedFsAdapterTrait<PresetLibraryEntity> for MockPresetLibraryAdapter {
        fn read(&self) -> Result<PresetLibraryEntity> {
            if self.corrupt {
                anyhow::bail!("corrupt library");
            }
            let stored = self.state.lock().unwrap().clone();
            Ok(stored.unwrap_or_else(|| PresetLibraryEntity::built_in(t0())))
        }

        fn insert(&self, data: &PresetLibraryEntity) -> Result<()> {
            let mut state = self.state.lock().unwrap();
            anyhow::ensure!(state.is_none(), "library already stored");
            *state = Some(data.clone());
            Ok(())
        }

        fn update(&self, data: &PresetLibraryEntity) -> Result<()> {
            let mut state = self.state.lock().unwrap();
            anyhow::ensure!(state.is_some() || self.corrupt, "nothing stored to update");
            *state = Some(data.clone());
            Ok(())
        }

        fn delete(&self) -> Result<()> {
            *self.state.lock().unwrap() = None;
            Ok(())
        }

        fn exists(&self) -> bool {
            self.state.lock().unwrap().is_some()
        }
    }

    #[derive(Default)]
    struct MockPresetLibraryRepository {
        adapter: MockPresetLibraryAdapter,
    }

    impl PresetLibraryApiRepository for MockPresetLibraryRepository {
        fn fs_adapter(&self) -> &dyn FixedFsAdapterTrait<PresetLibraryEntity> {
            &self.adapter
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn service(repo: MockPresetLibraryRepository) -> PresetLibraryService<MockPresetLibraryRepository> {
        PresetLibraryService::new(repo, Arc::new(FixedClock::new(t0())))
    }

    fn upsert_request() -> PresetLibraryUpsertRequest {
        serde_json::from_value(json!({
            "presets": [
                {
                    "title": "Last 2 Hours",
                    "alias": "last_2_hours",
                    "anchor": { "type": "relative", "lookback_secs": 7200 },
                    "granularity": "minute"
                },
                {
                    "title": "All Time",
                    "alias": "all_time",
                    "anchor": { "type": "all_time" },
                    "granularity": "month"
                }
            ]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn serves_built_in_presets_when_nothing_stored() {
        let service = service(MockPresetLibraryRepository::default());

        let presets = service.list_presets().await.unwrap();
        assert_eq!(service.source(), PresetSource::BuiltIn);
        assert_eq!(presets.first().map(|p| p.alias.as_str()), Some("last_15_minutes"));
    }

    #[tokio::test]
    async fn upsert_uses_trait_repository() {
        let service = service(MockPresetLibraryRepository::default());

        let stored = service.upsert_presets(upsert_request()).await.unwrap();
        assert_eq!(stored.presets.len(), 2);
        assert_eq!(service.source(), PresetSource::Stored);

        let aliases: Vec<_> = service
            .list_presets()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.alias)
            .collect();
        assert_eq!(aliases, vec!["last_2_hours", "all_time"]);
    }

    #[tokio::test]
    async fn invalid_upsert_is_a_bad_request() {
        let service = service(MockPresetLibraryRepository::default());
        let mut req = upsert_request();
        req.presets[1].alias = "custom".into();

        let err = service.upsert_presets(req).await.unwrap_err();
        assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::BadRequest(_))));
        assert_eq!(service.source(), PresetSource::BuiltIn);
    }

    #[tokio::test]
    async fn reset_drops_stored_library() {
        let service = service(MockPresetLibraryRepository::default());
        service.upsert_presets(upsert_request()).await.unwrap();

        service.reset_presets().await.unwrap();
        assert_eq!(service.source(), PresetSource::BuiltIn);
    }

    #[tokio::test]
    async fn corrupt_library_falls_back_to_built_in() {
        let repo = MockPresetLibraryRepository {
            adapter: MockPresetLibraryAdapter {
                corrupt: true,
                ..Default::default()
            },
        };
        let service = service(repo);

        let presets = service.list_presets().await.unwrap();
        assert_eq!(presets.last().map(|p| p.alias.as_str()), Some("all_time"));

        let (library, source) = service.load();
        assert_eq!(source, PresetSource::BuiltInFallback);
        assert_eq!(library.presets.len(), presets.len());
        assert_eq!(service.source(), PresetSource::BuiltInFallback);
    }

    #[tokio::test]
    async fn upsert_over_corrupt_library_replaces_it() {
        let repo = MockPresetLibraryRepository {
            adapter: MockPresetLibraryAdapter {
                corrupt: true,
                ..Default::default()
            },
        };
        let service = service(repo);

        let stored = service.upsert_presets(upsert_request()).await.unwrap();
        assert_eq!(stored.presets.len(), 2);
    }

    #[tokio::test]
    async fn second_upsert_updates_stored_library() {
        let service = service(MockPresetLibraryRepository::default());
        service.upsert_presets(upsert_request()).await.unwrap();

        let mut req = upsert_request();
        req.presets.truncate(1);
        let stored = service.upsert_presets(req).await.unwrap();

        assert_eq!(stored.presets.len(), 1);
        assert_eq!(stored.created_at, t0());
        assert_eq!(service.source(), PresetSource::Stored);
    }

    #[tokio::test]
    async fn out_of_range_stored_preset_is_skipped() {
        let mut library = PresetLibraryEntity::built_in(t0());
        library.presets[0].anchor = PresetAnchor::Relative {
            lookback_secs: 10_000_000_000_000,
        };
        let repo = MockPresetLibraryRepository {
            adapter: MockPresetLibraryAdapter {
                state: Mutex::new(Some(library)),
                ..Default::default()
            },
        };
        let service = service(repo);

        let presets = service.list_presets().await.unwrap();
        assert_eq!(presets.len(), 8);
        assert_eq!(presets.first().map(|p| p.alias.as_str()), Some("last_30_minutes"));
    }
}
