use thiserror::Error;

use crate::animation::CurveType;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Query made against a curve without control points
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    /// Keyframe or query time that is NaN, or infinite on a keyframe
    #[error("Invalid time: {0}")]
    InvalidTime(f32),

    #[error("Invalid operation: cannot change curve type from {from:?} to {to:?} when curve is not empty")]
    InvalidOperation { from: CurveType, to: CurveType },

    #[error("Shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch { expected: CurveType, found: CurveType },

    /// Payload component count does not fit any curve type
    #[error("Invalid component count {0}, expected 1 to 4")]
    ComponentCount(usize),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CurveError>;
