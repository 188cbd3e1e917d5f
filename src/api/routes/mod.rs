//! API route declarations (e.g., /api/v1/*)

pub mod date_range_routes;
pub mod preset_routes;
pub mod system_routes;
