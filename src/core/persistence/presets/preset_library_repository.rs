use std::path::Path;
use std::sync::Arc;

use crate::core::clock::Clock;
use crate::core::persistence::fixed_fs_adapter_trait::FixedFsAdapterTrait;
use crate::core::persistence::storage_path::preset_library_path;

use super::preset_library_api_repository_trait::PresetLibraryApiRepository;
use super::preset_library_entity::PresetLibraryEntity;
use super::preset_library_fs_adapter::PresetLibraryFsAdapter;

pub struct PresetLibraryRepository {
    adapter: PresetLibraryFsAdapter,
}

impl PresetLibraryRepository {
    pub fn new(data_dir: &Path, clock: Arc<dyn Clock>) -> Self {
        Self {
            adapter: PresetLibraryFsAdapter::new(preset_library_path(data_dir), clock),
        }
    }
}

impl PresetLibraryApiRepository for PresetLibraryRepository {
    fn fs_adapter(&self) -> &dyn FixedFsAdapterTrait<PresetLibraryEntity> {
        &self.adapter
    }
}
