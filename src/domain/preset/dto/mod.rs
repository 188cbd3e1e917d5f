pub mod preset_library_upsert_request;
