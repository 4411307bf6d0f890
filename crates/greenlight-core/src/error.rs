//! Error types for Greenlight.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not found: {0}")]
    NotFound(String),

    /// Upstream message text is carried verbatim so callers can surface it.
    #[error("{0}")]
    Upstream(String),
}

pub type Result<T> = std::result::Result<T, Error>;
