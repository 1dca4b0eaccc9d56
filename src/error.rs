//! Error types for loading tables.

use crate::parser::ParseError;
use thiserror::Error;

/// Errors that can occur while fetching and parsing a table source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The transport answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be turned into a table
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result type alias for table loading operations
pub type LoadResult<T> = Result<T, LoadError>;
