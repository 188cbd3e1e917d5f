pub mod date_range_request;
pub mod date_range_response;
