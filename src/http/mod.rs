pub mod client;
pub mod headers;
pub mod request;

pub use client::build_http_client;
pub use request::{ReplayRequest, build_request, parse_access_log_line, parse_request_line};
