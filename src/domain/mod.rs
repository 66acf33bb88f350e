//! Domain layer containing business entities and logic.
//!
//! This module defines the data model of the shortener and the contracts the
//! service layer relies on, independent of storage and HTTP concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`clock`] - Time source abstraction used for creation and expiry
//!
//! # Link Lifecycle
//!
//! A shortcode is either unknown or active. Expiry is never stored: it is
//! derived on each access by comparing the current instant with
//! [`entities::Link::expires_at`]. Links are never deleted, so a shortcode
//! is never reused for the lifetime of the process.

pub mod clock;
pub mod entities;
pub mod repositories;
