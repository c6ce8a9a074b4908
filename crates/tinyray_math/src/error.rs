use glam::Vec3;
use thiserror::Error;

/// Errors raised by the checked math helpers.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// Attempted to normalize a vector with zero or non-finite length.
    #[error("cannot normalize degenerate vector {0}")]
    DegenerateVector(Vec3),
}
