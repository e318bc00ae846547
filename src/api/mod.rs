//! HTTP API layer.
//!
//! Translates HTTP requests into service calls and renders results in the
//! shared response envelope.
//!
//! - [`dto`] - Request/response serialization types
//! - [`extractors`] - Custom request extractors
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request id and tracing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
