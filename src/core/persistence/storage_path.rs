use std::path::{Path, PathBuf};

pub const PRESET_LIBRARY_FILE: &str = "date_presets.json";

pub fn preset_library_path(data_dir: &Path) -> PathBuf {
    data_dir.join(PRESET_LIBRARY_FILE)
}
