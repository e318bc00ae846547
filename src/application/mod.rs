//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls, validation and business rules, and
//! expose a clean API to HTTP handlers and the admin CLI.
//!
//! - [`services::url_service::UrlService`] - Alias assignment, resolution and deletion

pub mod services;
