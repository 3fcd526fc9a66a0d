//! Cube-face error types.

/// Errors raised when converting untyped data into cube-face values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FaceError {
    /// A face index outside 0..=5.
    #[error("invalid cube face index {0}, expected 0..=5")]
    InvalidIndex(u8),
}
