pub mod date_range;
pub mod preset;
pub mod system;
