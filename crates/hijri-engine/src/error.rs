//! Error types for hijri-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HijriError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid scope: {0}")]
    InvalidScope(String),

    /// A bounded boundary scan ran out of steps. Hijri months are 29 or 30
    /// days long, so this indicates a broken invariant, not bad input.
    #[error("Boundary not found: {0}")]
    BoundaryNotFound(String),
}

pub type Result<T> = std::result::Result<T, HijriError>;
