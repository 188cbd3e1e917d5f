use crate::core::persistence::fixed_fs_adapter_trait::FixedFsAdapterTrait;

use super::preset_library_entity::PresetLibraryEntity;

/// API-facing repository abstraction for the preset library.
pub trait PresetLibraryApiRepository: Send + Sync {
    fn fs_adapter(&self) -> &dyn FixedFsAdapterTrait<PresetLibraryEntity>;

    fn read(&self) -> anyhow::Result<PresetLibraryEntity> {
        self.fs_adapter().read()
    }

    fn insert(&self, library: &PresetLibraryEntity) -> anyhow::Result<()> {
        self.fs_adapter().insert(library)
    }

    fn update(&self, library: &PresetLibraryEntity) -> anyhow::Result<()> {
        self.fs_adapter().update(library)
    }

    fn delete(&self) -> anyhow::Result<()> {
        self.fs_adapter().delete()
    }

    fn is_stored(&self) -> bool {
        self.fs_adapter().exists()
    }
}
