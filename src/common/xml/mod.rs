//! Minimal namespace-aware XML element tree.
//!
//! The translator only ever reads a tree; this module is the thin layer that
//! turns XML text into one.

mod element;
mod parser;

pub use element::{Descendants, Element, OMML_NS, QName, WML_NS, XML_NS};
pub use parser::{MAX_DEPTH, parse};
