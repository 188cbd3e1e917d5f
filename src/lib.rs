//! Date range preset resolution for analytics pickers.
//!
//! The core lives in [`domain::date_range`]: a resolver that maps a
//! `{gte, lte}` filter onto the preset a picker should display, a free text
//! editor that never produces an inverted range, and the granularity
//! suggestion policy. The rest of the crate serves that over HTTP.

pub mod api;
pub mod app_state;
pub mod core;
pub mod debug;
pub mod domain;
pub mod errors;
pub mod routes;
