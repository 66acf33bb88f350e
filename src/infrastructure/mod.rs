//! Infrastructure layer for storage implementations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`memory`] - In-memory Link Store and Click Log

pub mod memory;
