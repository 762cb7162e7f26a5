//! tierlist-common — Shared error types and configuration used across the tierlist crates.

pub mod error;
pub mod tierlist_config;

// Re-export commonly used types
pub use error::{Result, TierlistError};
pub use tierlist_config::{CategorySpec, SubjectSpec, TierSpec, TierlistConfig};
