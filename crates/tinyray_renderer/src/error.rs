use thiserror::Error;
use tinyray_math::MathError;

/// Errors that can occur while setting up or writing out a render.
///
/// Tracing itself never fails: misses, total internal reflection and the
/// depth cutoff all produce ordinary colors.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    #[error("Invalid render config: {0}")]
    InvalidConfig(String),

    #[error("Math error: {0}")]
    Math(#[from] MathError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
