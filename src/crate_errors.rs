use crate::{
    args,
    rotation,
};

/// Error-type enum for the `trackrot` crate.
/// Wraps the argument and rotation errors.
#[derive(Debug)]
pub enum TrackrotError {
    ArgError(args::ArgError),
    RotationError(rotation::RotationError),
}
impl std::fmt::Display for TrackrotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackrotError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            TrackrotError::RotationError(error) => write!(f, "! ROTATION ERROR:\n{}", error),
        }
    }
}
impl From<args::ArgError> for TrackrotError {
    fn from(error: args::ArgError) -> Self {
        TrackrotError::ArgError(error)
    }
}
impl From<rotation::RotationError> for TrackrotError {
    fn from(error: rotation::RotationError) -> Self {
        TrackrotError::RotationError(error)
    }
}

/// Result type for the `trackrot` crate.
pub type TrackrotResult<T> = std::result::Result<T, TrackrotError>;
