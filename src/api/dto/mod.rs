//! API DTOs

pub mod system_dto;

use serde::Serialize;
use serde_with::skip_serializing_none;

/// Envelope for every successful JSON response.
#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub is_successful: bool,
    pub data: Option<T>,
    pub error_msg: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            is_successful: true,
            data: Some(data),
            error_msg: None,
        }
    }
}
