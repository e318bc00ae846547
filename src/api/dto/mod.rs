//! Data Transfer Objects for API responses.
//!
//! Every JSON body embeds the [`response::ApiResponse`] envelope.

pub mod health;
pub mod response;
pub mod save;
