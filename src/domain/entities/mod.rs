//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored alias to URL mapping
//! - [`SaveRequest`] - Input for creating a new mapping

pub mod url;

pub use url::{SaveRequest, UrlRecord};
