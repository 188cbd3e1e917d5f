use std::{
    fs::{self, File},
    io::{BufReader, Write},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::clock::Clock;
use crate::core::persistence::fixed_fs_adapter_trait::FixedFsAdapterTrait;

use super::preset_library_entity::PresetLibraryEntity;

/// FS adapter for the preset library.
///
/// Stores pretty-printed JSON at `<data_dir>/date_presets.json`. A missing
/// file reads as the built-in defaults. Writes go through a temp file and a
/// rename so a crash never leaves a half written library behind.
pub struct PresetLibraryFsAdapter {
    path: PathBuf,
    clock: Arc<dyn Clock>,
}

impl PresetLibraryFsAdapter {
    pub fn new(path: PathBuf, clock: Arc<dyn Clock>) -> Self {
        Self { path, clock }
    }

    fn write(&self, data: &PresetLibraryEntity) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).context("Failed to create preset library directory")?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        let mut f = File::create(&tmp_path).context("Failed to create temp preset library file")?;

        let json = serde_json::to_string_pretty(data).context("Failed to serialize preset library")?;
        f.write_all(json.as_bytes())?;
        f.flush()?;
        f.sync_all().context("Failed to sync temp preset library file")?;

        fs::rename(&tmp_path, &self.path).context("Failed to finalize preset library file")?;
        debug!(path = %self.path.display(), "Preset library written");

        Ok(())
    }
}

impl FixedFsAdapterTrait<PresetLibraryEntity> for PresetLibraryFsAdapter {
    fn read(&self) -> Result<PresetLibraryEntity> {
        if !self.path.exists() {
            return Ok(PresetLibraryEntity::built_in(self.clock.now()));
        }

        let file = File::open(&self.path).context("Failed to open preset library file")?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse preset library at {}", self.path.display()))
    }

    fn insert(&self, data: &PresetLibraryEntity) -> Result<()> {
        anyhow::ensure!(!self.path.exists(), "Preset library already stored at {}", self.path.display());
        self.write(data)
    }

    fn update(&self, data: &PresetLibraryEntity) -> Result<()> {
        self.write(data)
    }

    fn delete(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).context("Failed to delete preset library file")?;
        }
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::persistence::storage_path::preset_library_path;
    use crate::domain::date_range::model::{Granularity, PresetAnchor, PresetDefinition};
    use chrono::{DateTime, TimeZone, Utc};
    use tempfile::TempDir;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn adapter(path: PathBuf) -> PresetLibraryFsAdapter {
        PresetLibraryFsAdapter::new(path, Arc::new(FixedClock::new(t0())))
    }

    #[test]
    fn missing_file_reads_defaults() {
        let dir = TempDir::new().unwrap();
        let adapter = adapter(preset_library_path(dir.path()));

        assert!(!adapter.exists());
        let library = adapter.read().unwrap();
        assert_eq!(library.presets.first().map(|p| p.alias.as_str()), Some("last_15_minutes"));
        assert_eq!(library.created_at, t0());
    }

    #[test]
    fn insert_then_read_returns_stored_library() {
        let dir = TempDir::new().unwrap();
        let adapter = adapter(preset_library_path(&dir.path().join("nested")));

        let mut library = PresetLibraryEntity::built_in(t0());
        library.presets = vec![PresetDefinition {
            id: None,
            title: "Quarter".into(),
            alias: "quarter".into(),
            anchor: PresetAnchor::Relative {
                lookback_secs: 90 * 24 * 3600,
            },
            granularity: Granularity::Month,
        }];
        adapter.insert(&library).unwrap();

        assert!(adapter.exists());
        assert_eq!(adapter.read().unwrap(), library);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = preset_library_path(dir.path());
        fs::write(&path, "{ not json").unwrap();

        assert!(adapter(path).read().is_err());
    }

    #[test]
    fn delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let adapter = adapter(preset_library_path(dir.path()));

        adapter.insert(&PresetLibraryEntity::built_in(t0())).unwrap();
        adapter.delete().unwrap();
        adapter.delete().unwrap();
        assert!(!adapter.exists());
    }

    #[test]
    fn insert_refuses_to_overwrite_and_update_replaces() {
        let dir = TempDir::new().unwrap();
        let adapter = adapter(preset_library_path(dir.path()));
        adapter.insert(&PresetLibraryEntity::built_in(t0())).unwrap();

        let mut library = PresetLibraryEntity::built_in(t0());
        library.presets.truncate(1);
        assert!(adapter.insert(&library).is_err());

        adapter.update(&library).unwrap();
        assert_eq!(adapter.read().unwrap().presets.len(), 1);
    }
}
