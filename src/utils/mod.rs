//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Shortcode generation and validation
//! - [`target_url`] - Target URL validation
//! - [`timestamp`] - Timestamp wire format

pub mod code_generator;
pub mod target_url;
pub mod timestamp;
