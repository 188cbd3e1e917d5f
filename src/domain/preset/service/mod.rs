pub mod preset_library_service;
