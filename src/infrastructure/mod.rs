//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - SQLite repository implementations and pool bootstrap

pub mod persistence;
