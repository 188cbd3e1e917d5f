//! Date range presets, resolution and the picker state built on them.

pub mod dto;
pub mod model;
pub mod service;
