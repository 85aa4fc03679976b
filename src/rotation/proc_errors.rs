/// Rotation process error type.
#[derive(Debug)]
pub enum RotationError {
    /// Input path suffix matches no supported format.
    UnrecognizedFormat(String),
    /// IO error (missing file, permissions, malformed content, failed write).
    IoError(crate::io::IoError),
}
impl std::fmt::Display for RotationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RotationError::UnrecognizedFormat(error) => write!(f, "- Format Error:\n- {}", error),
            RotationError::IoError(error) => write!(f, "- IO Error:\n{}", error),
        }
    }
}
impl From<crate::io::IoError> for RotationError {
    fn from(error: crate::io::IoError) -> Self {
        RotationError::IoError(error)
    }
}

/// Result type for the `rotation` module.
pub type ProcResult<T> = std::result::Result<T, RotationError>;
