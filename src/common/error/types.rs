//! Error type for OMML translation.
use thiserror::Error;

/// Main error type for OMML parsing and translation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A `func` construct names a function with no LaTeX template
    #[error("Unsupported function: {0}")]
    UnsupportedFunction(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Input is well-formed XML but not a usable tree
    #[error("Invalid structure: {0}")]
    InvalidStructure(String),

    /// Lookup table configuration could not be read or written
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for OMML operations.
pub type Result<T> = std::result::Result<T, Error>;
