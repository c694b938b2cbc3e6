//! Error types for the light document pipeline
//!
//! Interning, building and rendering never fail. Errors only come from the
//! edges, where raw input is materialized into lines.

use std::fmt;

/// Errors that can occur before a line sequence reaches the builder
#[derive(Debug, Clone, PartialEq)]
pub enum DomError {
    /// The input source could not be read
    Io { path: String, message: String },
    /// The input source was read but is not valid UTF-8
    Encoding { path: String },
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::Io { path, message } => write!(f, "Error reading file '{path}': {message}"),
            DomError::Encoding { path } => write!(f, "File '{path}' is not valid UTF-8"),
        }
    }
}

impl std::error::Error for DomError {}
