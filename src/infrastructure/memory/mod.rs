//! Process-local storage.
//!
//! All state lives in memory and is lost on restart.

pub mod store;

pub use store::InMemoryStore;
