//! Common types shared across the XML and formula modules.

// Submodule declarations
pub mod error;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use xml::{Element, QName};
