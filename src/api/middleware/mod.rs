//! HTTP middleware for request processing and observability.

pub mod catch_panic;
pub mod request_id;
pub mod timeout;
pub mod tracing;
