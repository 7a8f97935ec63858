//! Error types for beatmark-core.

use crate::curve::CurvePath;
use thiserror::Error;

/// Error type for curve operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Curve {0} is locked")]
    Locked(CurvePath),

    #[error("Curve {0} has no baked samples")]
    NoSamples(CurvePath),

    #[error("No curve at {0}")]
    NotFound(CurvePath),
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
