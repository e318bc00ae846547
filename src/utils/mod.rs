//! Utility functions used across the application.
//!
//! - [`alias`] - Random alias generation and alias charset validation

pub mod alias;
