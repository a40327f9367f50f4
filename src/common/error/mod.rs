//! Error types for the crate.
//!
//! Translation itself only fails on unsupported function names; the other
//! variants come from the XML and configuration surfaces around it.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
