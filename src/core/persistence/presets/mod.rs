pub mod preset_library_api_repository_trait;
pub mod preset_library_entity;
pub mod preset_library_fs_adapter;
pub mod preset_library_repository;
