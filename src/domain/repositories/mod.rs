//! Repository trait definitions for the domain layer.
//!
//! Repositories abstract the Link Store and the Click Log behind an async
//! interface so the service layer can be tested with fresh, isolated stores
//! or with generated mocks.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::memory`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Link storage and per-link click logs

pub mod link_repository;

pub use link_repository::{ClickOutcome, LinkRepository, StoreTotals};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
