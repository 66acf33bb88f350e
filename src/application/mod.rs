//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the operations HTTP
//! handlers call into.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shorten and redirect
//! - [`services::stats_service::StatsService`] - Click analytics

pub mod services;
