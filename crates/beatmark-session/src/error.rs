//! Error types for beatmark-session.

use thiserror::Error;

/// Error type for session operations.
///
/// The precondition variants (`NoSourceCurve`, `NoTargetCurves`,
/// `EmptyBuffer`, `NoActiveCurve`) correspond to actions a host would
/// disable rather than report; the matching `can_*` polls on
/// [`Session`](crate::Session) exist for that.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No selected curve with baked samples to copy from")]
    NoSourceCurve,

    #[error("No selected keyframe curves to paste into")]
    NoTargetCurves,

    #[error("Copy buffer is empty")]
    EmptyBuffer,

    #[error("No selected curve with baked samples")]
    NoActiveCurve,

    #[error("Bake failed: {0}")]
    Bake(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Curve(#[from] beatmark_core::Error),
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, SessionError>;
