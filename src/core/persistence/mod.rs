pub mod fixed_fs_adapter_trait;
pub mod presets;
pub mod storage_path;
