//! # Short URLs
//!
//! An in-memory URL shortening service built with Axum. It mints short codes
//! for long URLs, redirects visitors while a link is within its validity
//! window, and records every visit for later analysis.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, clock and repository traits
//! - **Application Layer** ([`application`]) - Shorten, redirect and stats logic
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory Link Store and Click Log
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:8000"   # Optional
//! cargo run
//!
//! curl -X POST localhost:8000/shorturls \
//!      -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com", "validity": 5}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, LinkSettings, StatsService};
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::entities::{Click, Link, LinkStats, NewClick};
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::InMemoryStore;
    pub use crate::state::AppState;
}
