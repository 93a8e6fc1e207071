// third-party imports
use thiserror::Error;

/// Error is an error which may occur when using a wildcard matcher.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("wildcard matcher is not initialized")]
    NotInitialized,
    #[error("wildcard pattern is empty")]
    EmptyPattern,
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
