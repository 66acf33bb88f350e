//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortcode mapped to its target URL and validity window
//! - [`Click`] - A single successful redirect through a link
//! - [`LinkStats`] - A link together with its ordered click log
//!
//! `NewClick` carries the request metadata captured before a click is
//! timestamped and appended.

pub mod click;
pub mod link;

pub use click::{Click, NewClick};
pub use link::{Link, LinkStats};
